use crate::board::{Action, Frame};
use crate::state::GameState;

/// Empty cells shown around the stones, so the cells a human is most likely
/// to play next are on screen with their coordinates.
const MARGIN: i32 = 2;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Renders the stones of `state` with column numbers across the top and
    /// row numbers down the left. The most recent move is bracketed.
    pub fn render_board(&mut self, state: &GameState) {
        let frame = visible_frame(state);
        let last_action = state.last_action();

        self.buffer.push_str("     ");
        for x in frame.x..frame.right() {
            self.buffer.push_str(&format!("{:^3}", x));
        }
        self.buffer.push('\n');

        for y in frame.y..frame.bottom() {
            self.buffer.push_str(&format!("{:>4} ", y));
            for x in frame.x..frame.right() {
                let stone = state.read(x, y).to_char();
                if last_action == Some(Action::new(x, y)) {
                    self.buffer.push_str(&format!("[{}]", stone));
                } else {
                    self.buffer.push_str(&format!(" {} ", stone));
                }
            }
            self.buffer.push('\n');
        }
    }

    /// Renders the board followed by whose turn it is, or the winner.
    pub fn render_game_state(&mut self, state: &GameState, stats: Option<&str>) {
        self.clear();
        self.render_board(state);
        self.buffer.push('\n');

        match state.winner() {
            Some(winner) => self.buffer.push_str(&format!("Winner: {}\n", winner)),
            None => self
                .buffer
                .push_str(&format!("Turn: {}\n", state.current_player())),
        }

        if let Some(action) = state.last_action() {
            self.buffer.push_str(&format!("Last move: {}\n", action));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

/// Every cell that has held a stone, padded by `MARGIN`. An empty board shows
/// the area around the origin.
fn visible_frame(state: &GameState) -> Frame {
    let in_use = state.occupancy().in_use();
    let stones = if in_use.is_empty() {
        Frame::new(0, 0, 1, 1)
    } else {
        in_use
    };

    Frame::new(
        stones.x - MARGIN,
        stones.y - MARGIN,
        stones.width + 2 * MARGIN,
        stones.height + 2 * MARGIN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku_position;

    #[test]
    fn test_render_empty_board() {
        let state = GameState::default();
        let mut ui = GameDisplay::new();
        ui.render_board(&state);
        let rendered = ui.buffer();

        let lines: Vec<&str> = rendered.lines().collect();
        // header plus five rows
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("-2"));
        assert!(lines[3].starts_with("   0 "));
        assert!(!rendered.contains('X'));
    }

    #[test]
    fn test_render_marks_last_move() {
        let mut state = gomoku_position! { X. / .O };
        state.apply(Action::new(2, 2));
        let rendered = state.to_string();

        assert!(rendered.contains("[X]"));
        assert_eq!(rendered.matches('X').count(), 2);
        assert_eq!(rendered.matches('O').count(), 1);
    }
}
