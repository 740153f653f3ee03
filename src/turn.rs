use crate::types::Color;

/// Tracks whose turn it is. Pass policy lives in [`crate::game::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    active: Color,
}

impl TurnController {
    pub fn new(starting: Color) -> Self {
        Self { active: starting }
    }

    pub fn active(&self) -> Color {
        self.active
    }

    /// Hands the turn to the opponent and returns the new active color.
    pub fn advance(&mut self) -> Color {
        self.active = self.active.opponent();
        self.active
    }
}
