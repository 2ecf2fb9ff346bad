//! Line heuristic.
//!
//! A position is never scored as a whole. Instead the four lines through a
//! cell are projected out of the occupancy grid, split into same-owner
//! segments, and each segment is scored from its five-cell occupancy pattern
//! and how open it is on either side. `GameState` folds the before/after
//! difference of these line scores into a running total on every move.

pub mod pattern_weights;
pub mod segment;

use crate::board::{Action, Cell, GrowableGrid, Player};

pub use pattern_weights::score;
pub use segment::{segments, Distance, SegmentInfo};

/// Heuristic values. Positive favors `Player::First`; `+inf`/`-inf` mark a
/// completed five.
pub type Score = f32;

/// A 1-D projection of the board.
pub type Line = Vec<Cell>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    MainDiagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::MainDiagonal,
        Direction::AntiDiagonal,
    ];

    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Line scores of both players for the same set of lines.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineScores {
    pub first: Score,
    pub second: Score,
}

impl LineScores {
    pub fn any_winning(&self) -> bool {
        self.first == Score::INFINITY || self.second == Score::INFINITY
    }
}

/// Projects the grid along `direction` through `action`.
///
/// The line covers the grid's in-use frame, extended to include `action`
/// itself, so the same cells are visited whether or not `action` has been
/// written yet.
pub fn extract_line(grid: &GrowableGrid<Cell>, action: Action, direction: Direction) -> Line {
    let frame = grid.in_use().union_point(action.x, action.y);
    let (dx, dy) = direction.step();

    let mut start = action;
    while frame.contains(start.x - dx, start.y - dy) {
        start = start.offset(-dx, -dy);
    }

    let mut line = Line::with_capacity((frame.width.max(frame.height)) as usize);
    let mut current = start;
    while frame.contains(current.x, current.y) {
        line.push(grid.read(current.x, current.y));
        current = current.offset(dx, dy);
    }
    line
}

/// Sum of the segment scores of `owner` in `line`.
pub fn score_line(line: &[Cell], owner: Player) -> Score {
    segments(line, owner).iter().map(score).sum()
}

/// Scores the four lines through `action` for both players.
pub fn score_lines_through(grid: &GrowableGrid<Cell>, action: Action) -> LineScores {
    let mut scores = LineScores::default();
    for &direction in Direction::ALL.iter() {
        let line = extract_line(grid, action, direction);
        scores.first += score_line(&line, Player::First);
        scores.second += score_line(&line, Player::Second);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::First;
    const N: Cell = Cell::Empty;
    const O: Cell = Cell::Second;

    fn grid_with(stones: &[(i32, i32, Cell)]) -> GrowableGrid<Cell> {
        let mut grid = GrowableGrid::new();
        for &(x, y, cell) in stones {
            grid.set(x, y, cell);
        }
        grid
    }

    #[test]
    fn test_score_line_sums_segments() {
        // one open pair, and a single stone blocked on the left
        let line = [N, X, X, N, N, O, X, N, N];
        let expected = 10.0 * 1.0 + 1.0 * 0.5;
        assert_eq!(score_line(&line, Player::First), expected);
    }

    #[test]
    fn test_score_line_empty() {
        assert_eq!(score_line(&[], Player::First), 0.0);
        assert_eq!(score_line(&[N, N, O], Player::First), 0.0);
    }

    #[test]
    fn test_score_line_five() {
        assert_eq!(score_line(&[X, X, X, X, X], Player::First), Score::INFINITY);
        assert_eq!(score_line(&[O, X, X, X, X, X, O], Player::First), 0.0);
        assert_eq!(score_line(&[O, X, X, X, X, X, X, O], Player::First), Score::INFINITY);
    }

    #[test]
    fn test_extract_horizontal_line() {
        let grid = grid_with(&[(0, 0, X), (3, 0, O), (1, 2, X)]);
        let line = extract_line(&grid, Action::new(1, 0), Direction::Horizontal);
        assert_eq!(line, vec![X, N, N, O]);
    }

    #[test]
    fn test_extract_vertical_line() {
        let grid = grid_with(&[(0, 0, X), (3, 0, O), (1, 2, X)]);
        let line = extract_line(&grid, Action::new(1, 0), Direction::Vertical);
        assert_eq!(line, vec![N, N, X]);
    }

    #[test]
    fn test_extract_diagonals() {
        let grid = grid_with(&[(0, 0, X), (1, 1, O), (2, 2, X), (2, 0, O), (0, 2, X)]);
        let main = extract_line(&grid, Action::new(1, 1), Direction::MainDiagonal);
        assert_eq!(main, vec![X, O, X]);
        let anti = extract_line(&grid, Action::new(1, 1), Direction::AntiDiagonal);
        assert_eq!(anti, vec![X, O, O]);
    }

    #[test]
    fn test_extract_line_through_unwritten_cell() {
        let grid = grid_with(&[(0, 0, X), (1, 0, X)]);
        let line = extract_line(&grid, Action::new(3, 0), Direction::Horizontal);
        assert_eq!(line, vec![X, X, N, N]);
    }

    #[test]
    fn test_extract_diagonal_reaches_stones_far_from_action() {
        let grid = grid_with(&[(0, 3, X), (1, 2, X), (0, 0, O)]);
        // the anti-diagonal through (3, 0) passes (2, 1), (1, 2), (0, 3)
        let line = extract_line(&grid, Action::new(3, 0), Direction::AntiDiagonal);
        assert_eq!(line, vec![X, X, N, N]);
    }

    #[test]
    fn test_extract_line_on_empty_grid() {
        let grid = GrowableGrid::new();
        for &direction in Direction::ALL.iter() {
            assert_eq!(extract_line(&grid, Action::new(5, -5), direction), vec![N]);
        }
    }

    #[test]
    fn test_score_lines_through() {
        let grid = grid_with(&[(0, 0, X), (1, 0, X)]);
        let scores = score_lines_through(&grid, Action::new(0, 0));
        // horizontal pair, plus the lone stone on each of the other three lines
        assert_eq!(scores.first, 10.0 + 3.0);
        assert_eq!(scores.second, 0.0);
        assert!(!scores.any_winning());
    }
}
