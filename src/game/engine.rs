use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use crate::board::{Action, Player};
use crate::state::{GameState, StateError};

use super::background_mover::BackgroundMover;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Core engine configuration. The engine always plays `Player::First`, the
/// maximizing side; `first_player` only decides who opens.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub first_player: Player,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            first_player: Player::First,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("{error}")]
    StateError { error: StateError },
    #[error("search error: {error}")]
    SearchError { error: SearchError },
    #[error("it is not the engine's turn")]
    NotEngineTurn,
    #[error("the engine's search ended without a move")]
    NoMoveFound,
}

impl From<StateError> for EngineError {
    fn from(error: StateError) -> Self {
        Self::StateError { error }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        Self::SearchError { error }
    }
}

/// A game in progress against the engine, the way a front end drives it:
/// human moves go through `make_move`, and engine moves are searched in the
/// background and picked up with `poll_engine_move`.
pub struct Engine {
    state: GameState,
    mover: BackgroundMover,
    search_depth: u8,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub const ENGINE_PLAYER: Player = Player::First;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.first_player),
            mover: BackgroundMover::new(config.search_depth),
            search_depth: config.search_depth,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_engine_turn(&self) -> bool {
        self.state.current_player() == Self::ENGINE_PLAYER
    }

    pub fn is_thinking(&self) -> bool {
        self.mover.thinking()
    }

    /// Plays `action` for whoever is to move, after checking it is legal.
    pub fn make_move(&mut self, action: Action) -> Result<(), EngineError> {
        self.state.try_apply(action)?;
        Ok(())
    }

    /// Starts searching the engine's reply in the background. Calling this
    /// again while a search is pending does nothing.
    pub fn start_thinking(&mut self) -> Result<(), EngineError> {
        if !self.is_engine_turn() {
            return Err(EngineError::NotEngineTurn);
        }
        if self.state.is_terminal() {
            return Err(StateError::GameOver.into());
        }
        self.mover.next_move_in_background(&self.state)?;
        Ok(())
    }

    /// Applies the engine's move if its background search has finished.
    pub fn poll_engine_move(&mut self) -> Result<Option<Action>, EngineError> {
        if !self.mover.poll_moved() {
            return Ok(None);
        }
        let action = self.mover.recent_move();
        self.state.try_apply(action)?;
        Ok(Some(action))
    }

    /// Searches the engine's move on the calling thread without playing it.
    pub fn best_move(&mut self) -> Result<Action, EngineError> {
        if !self.is_engine_turn() {
            return Err(EngineError::NotEngineTurn);
        }
        if self.state.is_terminal() {
            return Err(StateError::GameOver.into());
        }
        let mut searcher = AlphaBetaSearcher::new(self.search_depth);
        Ok(searcher.next_action(&mut self.state)?)
    }
}
