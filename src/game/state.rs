// src/game/state.rs

use crate::game::tentacles::question::{TentacleQuestion, TentacleTarget};

/// Zustand einer Runde. Die Maskierung ist davon unabhängig und wird
/// vor jeder Berechnung gesondert geprüft.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RoundState {
    #[default] // Startzustand
    Unresolved,
    Resolved,
}

impl RoundState {
    pub fn of(question: &TentacleQuestion) -> Self {
        match question.location {
            TentacleTarget::Unresolved => RoundState::Unresolved,
            TentacleTarget::Resolved(_) => RoundState::Resolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RoundState::Resolved)
    }
}
