//! Per-path candidate cache for ordering moves.
//!
//! The orderer tracks the line of play currently being searched. Candidates
//! recorded with `add_action` are filed under that line, so a later visit to
//! the same line can replay them, best-first once `sort` has run.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::board::{Action, Player};
use crate::evaluate::Score;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredAction {
    pub action: Action,
    pub heuristic_value: Score,
}

#[derive(Clone, Debug, Default)]
pub struct MoveOrderer {
    path: Vec<Action>,
    candidates: FxHashMap<Vec<Action>, Vec<ScoredAction>>,
}

impl MoveOrderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `action` as a candidate under the current path.
    pub fn add_action(&mut self, action: Action, heuristic_value: Score) {
        self.candidates
            .entry(self.path.clone())
            .or_insert_with(Vec::new)
            .push(ScoredAction {
                action,
                heuristic_value,
            });
    }

    /// Candidates recorded under the current path. Insertion order, unless
    /// `sort` has been called for this path since.
    pub fn sorted_legal_actions(&self) -> Vec<Action> {
        self.candidates
            .get(&self.path)
            .map(|scored| scored.iter().map(|s| s.action).collect())
            .unwrap_or_default()
    }

    /// Stably reorders the current path's candidates best-first for `player`:
    /// descending heuristic value for the maximizing side, ascending for the
    /// minimizing one.
    pub fn sort(&mut self, player: Player) {
        if let Some(scored) = self.candidates.get_mut(&self.path) {
            scored.sort_by(|a, b| {
                let ordering = b
                    .heuristic_value
                    .partial_cmp(&a.heuristic_value)
                    .unwrap_or(Ordering::Equal);
                if player.maximize_score() {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }
    }

    /// Descends into `action`.
    pub fn next(&mut self, action: Action) {
        self.path.push(action);
    }

    /// Backs out of the most recent `next`, returning the action left.
    pub fn prev(&mut self) -> Option<Action> {
        self.path.pop()
    }

    pub fn actions_stored(&self) -> bool {
        self.candidates
            .get(&self.path)
            .map_or(false, |scored| !scored.is_empty())
    }

    pub fn path(&self) -> &[Action] {
        &self.path
    }
}
