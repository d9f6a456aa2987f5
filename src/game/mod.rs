// src/game/mod.rs

pub mod context;
pub mod state;
pub mod tentacles;

pub use self::context::{GameContext, QuestionStore};
pub use self::state::RoundState;
