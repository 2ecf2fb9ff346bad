use thiserror::Error;

use crate::board::Action;

#[derive(Error, Debug, PartialEq)]
pub enum StateError {
    #[error("the game is already over")]
    GameOver,
    #[error("{action} is already occupied")]
    CellOccupied { action: Action },
    #[error("{action} is not near any stone")]
    NotLegal { action: Action },
    #[error("invalid character {found:?} in board diagram")]
    InvalidDiagram { found: char },
}
