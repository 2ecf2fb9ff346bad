//! Move input parsing and validation.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Action;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(-?\d+)\s*(?:,\s*|\s+)(-?\d+)\s*\)?$")
        .expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error}")]
    IOError { error: String },
    #[error("no input")]
    Empty,
    #[error("invalid input: {input:?}; expected `x y` or `x,y`")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Coordinate { action: Action },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }

        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(MoveInput::Quit),
            _ => {}
        }

        parse_action(trimmed).map(|action| MoveInput::Coordinate { action })
    }
}

/// Parses a single coordinate pair such as `3 -1`, `3,-1` or `(3, -1)`.
pub fn parse_action(input: &str) -> Result<Action, InputError> {
    let invalid = || InputError::InvalidInput {
        input: input.to_string(),
    };

    let caps = COORD_RE.captures(input.trim()).ok_or_else(invalid)?;
    let x = caps[1].parse().map_err(|_| invalid())?;
    let y = caps[2].parse().map_err(|_| invalid())?;
    Ok(Action::new(x, y))
}

/// Parses a `;`-separated list of coordinate pairs, e.g. `0,0; 1,1`.
pub fn parse_action_list(input: &str) -> Result<Vec<Action>, InputError> {
    input
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(parse_action)
        .collect()
}

/// Prompts on stdout and reads one move from stdin. End of input counts as
/// the user leaving.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    print!("your move (x y, or quit): ");
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: e.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
