//! Incrementally evaluated game state.
//!
//! `GameState` owns two growable grids: the stones themselves, and a per-cell
//! count of stones within `FRONTIER_RADIUS`. Legal actions are the empty cells
//! with a nonzero count, so the search never considers cells far from play.
//!
//! Every `apply` pushes one history entry holding the action, the mover, and
//! the resulting heuristic value and terminal flag. `undo` pops that entry and
//! restores the previous values verbatim rather than recomputing them, so a
//! search that applies and undoes millions of moves never drifts.

pub mod display;
pub mod error;
pub mod state_stack;

use crate::board::{Action, Cell, GrowableGrid, Player, FRONTIER_RADIUS};
use crate::evaluate::{score_lines_through, LineScores, Score};

pub use error::StateError;
use state_stack::StateStack;

#[derive(Clone, Copy, Debug, PartialEq)]
struct HistoryEntry {
    action: Option<(Action, Player)>,
    heuristic: Score,
    terminal: bool,
}

impl HistoryEntry {
    fn base() -> Self {
        Self {
            action: None,
            heuristic: 0.0,
            terminal: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    occupancy: GrowableGrid<Cell>,
    frontier: GrowableGrid<u8>,
    current_player: Player,
    history: StateStack<HistoryEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::First)
    }
}

impl GameState {
    /// An empty board with `starting_player` to move. The origin is the only
    /// legal action.
    pub fn new(starting_player: Player) -> Self {
        let mut frontier = GrowableGrid::new();
        frontier.set(0, 0, 1);

        Self {
            occupancy: GrowableGrid::new(),
            frontier,
            current_player: starting_player,
            history: StateStack::with_capacity(HistoryEntry::base(), 128),
        }
    }

    /// Builds a position from a diagram of rows separated by `/`. Within a row
    /// `X` is a `First` stone, `O` a `Second` stone and `.` an empty cell;
    /// whitespace is ignored. Row `r`, column `c` is the cell `(c, r)`.
    pub fn from_diagram(diagram: &str, to_move: Player) -> Result<Self, StateError> {
        let mut state = Self::new(to_move);
        for (y, row) in diagram.split('/').enumerate() {
            let cells = row.chars().filter(|c| !c.is_whitespace());
            for (x, c) in cells.enumerate() {
                let action = Action::new(x as i32, y as i32);
                match c {
                    'X' => state.place(action, Player::First),
                    'O' => state.place(action, Player::Second),
                    '.' => {}
                    found => return Err(StateError::InvalidDiagram { found }),
                }
            }
        }
        state.current_player = to_move;
        Ok(state)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn heuristic_value(&self) -> Score {
        self.history.peek().heuristic
    }

    pub fn is_terminal(&self) -> bool {
        self.history.peek().terminal
    }

    /// The player who completed a five, if the game is over. On a move that
    /// completes fives for both sides at once, the mover wins.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }
        self.history.peek().action.map(|(_, mover)| mover)
    }

    pub fn move_count(&self) -> usize {
        self.history.depth()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.history.peek().action.map(|(action, _)| action)
    }

    /// Actions applied since construction, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = Action> + '_ {
        self.history
            .entries()
            .iter()
            .filter_map(|entry| entry.action.map(|(action, _)| action))
    }

    #[inline]
    pub fn read(&self, x: i32, y: i32) -> Cell {
        self.occupancy.read(x, y)
    }

    pub fn occupancy(&self) -> &GrowableGrid<Cell> {
        &self.occupancy
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.frontier.read(action.x, action.y) != 0 && self.read(action.x, action.y).is_empty()
    }

    /// Every empty cell near a stone, row by row over the frontier's in-use
    /// frame.
    pub fn legal_actions(&self) -> Vec<Action> {
        let frame = self.frontier.in_use();
        let mut actions = Vec::with_capacity(frame.area());
        for y in frame.y..frame.bottom() {
            for x in frame.x..frame.right() {
                let action = Action::new(x, y);
                if self.is_legal(action) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Places a stone for the current player and passes the turn.
    ///
    /// The cell must be empty. Legality against the frontier is not checked
    /// here; see `try_apply`.
    pub fn apply(&mut self, action: Action) {
        self.place(action, self.current_player);
    }

    /// `apply`, after checking that the game is still running and `action`
    /// is one of the legal actions.
    pub fn try_apply(&mut self, action: Action) -> Result<(), StateError> {
        if self.is_terminal() {
            return Err(StateError::GameOver);
        }
        if !self.read(action.x, action.y).is_empty() {
            return Err(StateError::CellOccupied { action });
        }
        if !self.is_legal(action) {
            return Err(StateError::NotLegal { action });
        }
        self.apply(action);
        Ok(())
    }

    /// Reverts the most recent `apply`.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied.
    pub fn undo(&mut self) {
        assert!(self.history.depth() > 0, "undo called with no moves applied");

        let entry = self.history.pop();
        let (action, mover) = entry
            .action
            .expect("every entry above the base records its action");

        self.occupancy.set(action.x, action.y, Cell::Empty);
        self.adjust_frontier(action, false);
        self.current_player = mover;
    }

    fn place(&mut self, action: Action, mover: Player) {
        debug_assert!(
            self.read(action.x, action.y).is_empty(),
            "{} is already occupied",
            action
        );

        let before = score_lines_through(&self.occupancy, action);

        self.occupancy.set(action.x, action.y, Cell::from(mover));
        self.current_player = mover.opponent();
        self.adjust_frontier(action, true);

        let after = score_lines_through(&self.occupancy, action);

        let heuristic = next_heuristic(self.heuristic_value(), before, after, mover);
        self.history.push(HistoryEntry {
            action: Some((action, mover)),
            heuristic,
            terminal: after.any_winning(),
        });
    }

    fn adjust_frontier(&mut self, action: Action, increment: bool) {
        for dy in -FRONTIER_RADIUS..=FRONTIER_RADIUS {
            for dx in -FRONTIER_RADIUS..=FRONTIER_RADIUS {
                let count = self.frontier.write(action.x + dx, action.y + dy);
                if increment {
                    *count += 1;
                } else {
                    debug_assert!(*count > 0, "frontier count underflow near {}", action);
                    *count -= 1;
                }
            }
        }
    }
}

/// Folds the change in both players' line scores into the running value.
fn next_heuristic(previous: Score, before: LineScores, after: LineScores, mover: Player) -> Score {
    let mover_wins = if mover.maximize_score() {
        Score::INFINITY
    } else {
        Score::NEG_INFINITY
    };

    if after.first == Score::INFINITY && after.second == Score::INFINITY {
        return mover_wins;
    }

    let value = previous + delta(after.first, before.first) - delta(after.second, before.second);
    if value.is_nan() {
        mover_wins
    } else {
        value
    }
}

/// `after - before`, with an unchanged infinity counting as no change.
fn delta(after: Score, before: Score) -> Score {
    if after == before {
        0.0
    } else {
        after - before
    }
}
