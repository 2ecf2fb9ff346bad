//! Depth-limited minimax with alpha-beta pruning over a shared `GameState`.
//!
//! The searcher never clones the state. Every candidate is applied in place,
//! searched, and undone before the next one is tried, so the caller gets its
//! state back exactly as it was handed in.

pub mod move_orderer;


use log::{debug, info};
use thiserror::Error;

use crate::board::Action;
use crate::evaluate::Score;
use crate::state::GameState;

pub use move_orderer::{MoveOrderer, ScoredAction};

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<Score>,
}

impl AlphaBetaSearcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
            last_score: None,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Leaves reached, either at the depth horizon or at a finished game.
    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    /// Score of the action returned by the most recent `next_action`.
    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
        self.last_score = None;
    }

    /// Picks the best action for the side to move.
    ///
    /// Candidates are tried in `legal_actions` order and an action only
    /// replaces the current choice if it scores strictly better, so ties go
    /// to the earliest action. If every action loses outright the first one
    /// is returned.
    pub fn next_action(&mut self, state: &mut GameState) -> Result<Action, SearchError> {
        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }

        self.reset_stats();

        let candidates = state.legal_actions();
        let mut best_action = *candidates.first().ok_or(SearchError::NoAvailableMoves)?;

        let maximizing = state.current_player().maximize_score();
        let mut best_score = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for &action in candidates.iter() {
            let depth = self.search_depth - 1;
            let score = with_move_applied(state, action, |state| {
                if maximizing {
                    self.evaluate(state, depth, best_score, Score::INFINITY)
                } else {
                    self.evaluate(state, depth, Score::NEG_INFINITY, best_score)
                }
            });
            debug!("candidate {} scored {}", action, score);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_action = action;
            }
        }

        self.last_score = Some(best_score);
        info!(
            "{} plays {} (score {}, {} positions searched)",
            state.current_player(),
            best_action,
            best_score,
            self.searched_position_count
        );

        Ok(best_action)
    }

    /// Minimax value of `state` searched `depth` plies deep, within the
    /// `[alpha, beta]` window. Values outside the window are clamped to its
    /// nearer bound.
    pub fn evaluate(
        &mut self,
        state: &mut GameState,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.searched_position_count += 1;

        if depth == 0 || state.is_terminal() {
            self.termination_count += 1;
            return state.heuristic_value();
        }

        if state.current_player().maximize_score() {
            for action in state.legal_actions() {
                let score = with_move_applied(state, action, |state| {
                    self.evaluate(state, depth - 1, alpha, beta)
                });
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            alpha
        } else {
            for action in state.legal_actions() {
                let score = with_move_applied(state, action, |state| {
                    self.evaluate(state, depth - 1, alpha, beta)
                });
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }
}

/// Applies `action`, runs `search` on the resulting position and undoes the
/// action again before returning its score.
fn with_move_applied<F>(state: &mut GameState, action: Action, search: F) -> Score
where
    F: FnOnce(&mut GameState) -> Score,
{
    state.apply(action);
    let score = search(state);
    state.undo();
    score
}
