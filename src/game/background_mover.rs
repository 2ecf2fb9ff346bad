//! Runs the engine's search off the caller's thread.
//!
//! Each search gets its own worker thread and a snapshot of the caller's
//! state. The worker hands its action back over a one-shot channel, so the
//! caller either sees no result yet or a complete one, never a ready flag
//! without its move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use log::{error, trace};

use crate::alpha_beta_searcher::{AlphaBetaSearcher, SearchError};
use crate::board::Action;
use crate::state::GameState;

pub struct BackgroundMover {
    search_depth: u8,
    thinking: Arc<AtomicBool>,
    pending: Option<Receiver<Action>>,
    recent_move: Option<Action>,
}

impl BackgroundMover {
    pub fn new(search_depth: u8) -> Self {
        Self {
            search_depth,
            thinking: Arc::new(AtomicBool::new(false)),
            pending: None,
            recent_move: None,
        }
    }

    /// Starts searching the best action for the side to move in `state`.
    ///
    /// Only one search is ever in flight: while a result is still pending,
    /// either being searched or waiting for `poll_moved`, this returns
    /// `Ok(false)` and launches nothing. The state is checked before the
    /// worker starts, so the worker itself cannot fail.
    pub fn next_move_in_background(&mut self, state: &GameState) -> Result<bool, SearchError> {
        if self.pending.is_some() {
            return Ok(false);
        }
        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        if state.legal_actions().is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let (sender, receiver) = mpsc::channel();
        self.pending = Some(receiver);
        self.thinking.store(true, Ordering::Release);

        let thinking = Arc::clone(&self.thinking);
        let mut snapshot = state.clone();
        let search_depth = self.search_depth;

        thread::spawn(move || {
            let mut searcher = AlphaBetaSearcher::new(search_depth);
            match searcher.next_action(&mut snapshot) {
                Ok(action) => {
                    trace!("background search finished with {}", action);
                    // the mover may have been dropped while searching
                    let _ = sender.send(action);
                }
                Err(error) => error!("background search failed: {}", error),
            }
            thinking.store(false, Ordering::Release);
        });

        Ok(true)
    }

    /// Returns true exactly once per finished search, after which
    /// `recent_move` holds its action.
    pub fn poll_moved(&mut self) -> bool {
        let received = match &self.pending {
            Some(receiver) => receiver.try_recv(),
            None => return false,
        };

        match received {
            Ok(action) => {
                self.recent_move = Some(action);
                self.pending = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                false
            }
        }
    }

    /// The action of the last search picked up by `poll_moved`.
    ///
    /// # Panics
    ///
    /// Panics if `poll_moved` has never returned true.
    pub fn recent_move(&self) -> Action {
        self.recent_move
            .expect("recent_move called before poll_moved returned true")
    }

    pub fn thinking(&self) -> bool {
        self.thinking.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku_position;
    use std::time::Duration;

    fn wait_until_done(mover: &BackgroundMover) {
        while mover.thinking() {
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_background_move_matches_synchronous_search() {
        let state = gomoku_position! {
            .X.. /
            .OX. /
            ..O.
        };

        let mut mover = BackgroundMover::new(2);
        assert!(!mover.thinking());
        assert_eq!(mover.next_move_in_background(&state), Ok(true));

        wait_until_done(&mover);
        assert!(mover.poll_moved());
        assert!(!mover.poll_moved());

        let mut synchronous = state.clone();
        let expected = AlphaBetaSearcher::new(2)
            .next_action(&mut synchronous)
            .unwrap();
        assert_eq!(mover.recent_move(), expected);
        assert_eq!(mover.recent_move(), expected);
    }

    #[test]
    fn test_only_one_search_in_flight() {
        let state = GameState::default();
        let mut mover = BackgroundMover::new(3);

        assert_eq!(mover.next_move_in_background(&state), Ok(true));
        assert_eq!(mover.next_move_in_background(&state), Ok(false));

        wait_until_done(&mover);
        // still unclaimed, so a new launch would lose it
        assert_eq!(mover.next_move_in_background(&state), Ok(false));
        assert!(mover.poll_moved());
        assert_eq!(mover.recent_move(), Action::new(0, 0));

        assert_eq!(mover.next_move_in_background(&state), Ok(true));
        wait_until_done(&mover);
        assert!(mover.poll_moved());
    }

    #[test]
    fn test_caller_state_is_not_touched() {
        let state = gomoku_position! { XX. / .O. };
        let heuristic = state.heuristic_value();

        let mut mover = BackgroundMover::new(2);
        mover.next_move_in_background(&state).unwrap();
        wait_until_done(&mover);
        assert!(mover.poll_moved());

        assert_eq!(state.heuristic_value(), heuristic);
        assert_eq!(state.move_count(), 3);
    }

    #[test]
    fn test_thinking_until_move_is_ready() {
        let state = gomoku_position! {
            ...... /
            ..XO.. /
            .OXX.. /
            ..OX.. /
            ...O..
        };

        let mut mover = BackgroundMover::new(3);
        assert_eq!(mover.next_move_in_background(&state), Ok(true));
        assert!(mover.thinking());
        assert!(!mover.poll_moved());

        wait_until_done(&mover);
        assert!(!mover.thinking());
        assert!(mover.poll_moved());
        assert!(!mover.poll_moved());
    }

    #[test]
    fn test_poll_without_search() {
        let mut mover = BackgroundMover::new(3);
        assert!(!mover.poll_moved());
    }

    #[test]
    fn test_depth_zero_is_rejected_before_spawning() {
        let mut mover = BackgroundMover::new(0);
        assert_eq!(
            mover.next_move_in_background(&GameState::default()),
            Err(SearchError::DepthTooLow)
        );
        assert!(!mover.thinking());
    }

    #[test]
    #[should_panic(expected = "before poll_moved")]
    fn test_recent_move_before_ready_panics() {
        let mover = BackgroundMover::new(3);
        mover.recent_move();
    }
}
