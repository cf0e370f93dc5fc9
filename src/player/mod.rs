pub mod ai;
pub mod controller;

pub use ai::{EnginePlayer, RandomAI};
pub use controller::PlayerController;
