use crate::core::{MAX_DIMENSION, MIN_DIMENSION};
use anyhow::ensure;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_PATH: &str = "ai_config.json";

static CONFIG: OnceCell<AIConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_depth: usize,
    pub pruning: bool,
    /// Spread root moves over the rayon pool
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub seed: u64,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        Self::from_json(&config_str)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AIConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Falls back to the defaults only when the file does not exist. A file
    /// that fails to parse or validate is an error.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_or_default_from(CONFIG_PATH)
    }

    pub fn load_or_default_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(config_str) => Self::from_json(&config_str)
                .map_err(|e| e.context(format!("invalid config {}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using default AI config", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Process-wide config, read from disk on first successful access.
    pub fn get() -> anyhow::Result<&'static AIConfig> {
        CONFIG.get_or_try_init(Self::load_or_default)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        ensure!(
            range.contains(&self.board.rows) && range.contains(&self.board.columns),
            "board {}x{} outside supported range {}..={}",
            self.board.rows,
            self.board.columns,
            MIN_DIMENSION,
            MAX_DIMENSION
        );
        ensure!(self.search.max_depth > 0, "search.max_depth must be > 0");
        Ok(())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            board: BoardConfig {
                rows: 6,
                columns: 7,
            },
            search: SearchConfig {
                max_depth: 6,
                pruning: true,
                parallel: false,
            },
            selfplay: SelfPlaySettings {
                num_games: 10,
                seed: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AIConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.board.rows, config.board.columns), (6, 7));
        assert_eq!(config.search.max_depth, 6);
        assert!(config.search.pruning);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "version": "1.0",
            "board": { "rows": 8, "columns": 9 },
            "search": { "max_depth": 4, "pruning": false, "parallel": true },
            "selfplay": { "num_games": 3, "seed": 11 }
        }"#;
        let config = AIConfig::from_json(json).unwrap();
        assert_eq!(config.board.columns, 9);
        assert!(!config.search.pruning);
        assert!(config.search.parallel);
        assert_eq!(config.selfplay.seed, 11);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AIConfig::default();
        config.board.rows = 3;
        assert!(config.validate().is_err());

        let mut config = AIConfig::default();
        config.board.columns = 31;
        assert!(config.validate().is_err());

        let mut config = AIConfig::default();
        config.search.max_depth = 0;
        assert!(config.validate().is_err());
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = scratch_path("connect-four-missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            AIConfig::load_or_default_from(&path).unwrap(),
            AIConfig::default()
        );
    }

    #[test]
    fn test_zero_depth_file_is_rejected() {
        let path = scratch_path("connect-four-zero-depth");
        let mut config = AIConfig::default();
        config.search.max_depth = 0;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let err = AIConfig::load_or_default_from(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(format!("{:#}", err).contains("max_depth"));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let path = scratch_path("connect-four-malformed");
        std::fs::write(&path, "{ \"version\": ").unwrap();

        let result = AIConfig::load_or_default_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = AIConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(AIConfig::from_json(&json).unwrap(), config);
    }
}
