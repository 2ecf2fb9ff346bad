use crate::game::display::GameDisplay;

use super::GameState;
use std::fmt;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ui = GameDisplay::new();
        ui.render_board(self);
        write!(f, "{}", ui.buffer())
    }
}

/// Builds a `GameState` from a diagram: `X` for `First`, `O` for `Second`,
/// `.` for empty, rows separated by `/`. The first row is `y = 0`. An optional
/// leading `to_move: player;` picks the side to move (default `First`).
///
/// ```
/// use gomoku::board::{Cell, Player};
/// use gomoku::gomoku_position;
///
/// let state = gomoku_position! {
///     XX.. /
///     .OO.
/// };
/// assert_eq!(state.read(1, 0), Cell::First);
/// assert_eq!(state.current_player(), Player::First);
/// ```
#[macro_export]
macro_rules! gomoku_position {
    (to_move: $to_move:expr; $($row:tt)*) => {{
        $crate::state::GameState::from_diagram(stringify!($($row)*), $to_move)
            .expect("gomoku_position! diagram should be valid")
    }};
    ($($row:tt)*) => {{
        $crate::state::GameState::from_diagram(
            stringify!($($row)*),
            $crate::board::Player::First,
        )
        .expect("gomoku_position! diagram should be valid")
    }};
}
