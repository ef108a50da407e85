use serde::{Deserialize, Serialize};

use crate::*;

/// Generation counter, bumped on every restart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(u32);

impl SessionId {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Owned state of one game, replaced wholesale on restart.
///
/// Results from a setup started under an older [`SessionId`] are dropped, so a
/// slow fetch from before a restart cannot land on the fresh board.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    id: SessionId,
    config: GameConfig,
    phase: SetupState,
    board: Option<CategoryStore>,
    error: Option<GameError>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_id(SessionId::default(), config)
    }

    fn with_id(id: SessionId, config: GameConfig) -> Self {
        Self {
            id,
            config,
            phase: SetupState::Init,
            board: None,
            error: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> SetupState {
        self.phase
    }

    pub fn error(&self) -> Option<&GameError> {
        self.error.as_ref()
    }

    /// Only ever a complete board.
    pub fn board(&self) -> Option<&CategoryStore> {
        self.board.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SetupState::Ready) && self.board.is_some()
    }

    pub fn is_current(&self, id: SessionId) -> bool {
        self.id == id
    }

    /// Discards everything and returns the id the next setup must report under.
    pub fn reset(&mut self) -> SessionId {
        let id = self.id.next();
        log::debug!("session reset: {:?} -> {:?}", self.id, id);
        *self = Self::with_id(id, self.config);
        id
    }

    pub fn update_phase(&mut self, id: SessionId, phase: SetupState) -> bool {
        if !self.is_current(id) {
            log::info!("ignoring {:?} from stale session {:?}", phase, id);
            return false;
        }
        // terminal phases only arrive through `finish`, together with the board
        if self.phase.is_finished() || phase.is_finished() {
            return false;
        }
        self.phase = phase;
        true
    }

    /// Stores the outcome of a setup run. Anything short of a complete board
    /// leaves the session failed with no board.
    pub fn finish(&mut self, id: SessionId, result: Result<CategoryStore>) -> bool {
        if !self.is_current(id) {
            log::info!("ignoring setup result from stale session {:?}", id);
            return false;
        }

        match result {
            Ok(board) if board.is_complete() => {
                self.board = Some(board);
                self.error = None;
                self.phase = SetupState::Ready;
            }
            Ok(board) => {
                log::warn!("setup returned {} of {} categories", board.len(), self.config.categories);
                self.board = None;
                self.error = Some(GameError::InsufficientCategories {
                    available: board.len(),
                    required: self.config.categories.into(),
                });
                self.phase = SetupState::Failed;
            }
            Err(err) => {
                self.board = None;
                self.error = Some(err);
                self.phase = SetupState::Failed;
            }
        }
        true
    }

    /// Full grid, `None` until the session is ready.
    pub fn display(&self) -> Option<BoardDisplay> {
        self.board.as_ref().filter(|_| self.is_ready()).map(render)
    }

    /// Reveals one cell and returns what changed with its new rendering,
    /// `None` until ready.
    pub fn reveal(&mut self, coord: CellCoord) -> Option<(RevealOutcome, CellDisplay)> {
        if !self.is_ready() {
            return None;
        }
        let board = self.board.as_mut()?;
        Some(on_cell_activated(board, coord))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
