use crate::types::{EndCause, Player, TileVisual};

/// Coarse phase for display (no timestamps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseView {
    #[default]
    AwaitingFirstMove,
    TurnInProgress,
    /// "Switch player" notice is up
    SwitchingPlayers,
    GameOver,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major tile visuals
    pub tiles: Vec<TileVisual>,
    pub current_player: Player,
    pub scores: [u32; 2],
    pub phase: PhaseView,
    pub remaining_seconds: u64,
    pub turn_seconds: u64,
    pub winner: Option<Player>,
    pub cause: Option<EndCause>,
    /// Games played since launch, starting at 0
    pub episode_id: u32,
    /// Seed the session's boards are drawn from
    pub seed: u64,
}

impl MatchSnapshot {
    pub fn tile(&self, row: usize, col: usize) -> TileVisual {
        self.tiles[row * self.cols + col]
    }
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            tiles: Vec::new(),
            current_player: Player::One,
            scores: [0, 0],
            phase: PhaseView::AwaitingFirstMove,
            remaining_seconds: 0,
            turn_seconds: 0,
            winner: None,
            cause: None,
            episode_id: 0,
            seed: 0,
        }
    }
}
