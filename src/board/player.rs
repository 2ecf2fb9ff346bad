use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides. `First` is always the maximizing side: positive
/// heuristic values favor it.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    pub fn opponent(&self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::First => true,
            Player::Second => false,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::First)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::First => "first",
            Player::Second => "second",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "first" => Ok(Player::First),
            "second" => Ok(Player::Second),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: first, second, random"),
        }
    }
}

/// Contents of a single board cell.
///
/// The discriminants are signed so that the inverse of a stone is its
/// negation, with `Empty` (0) fixed.
#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Cell {
    Empty = 0,
    First = 1,
    Second = -1,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// Swaps the two stone colors and leaves `Empty` alone.
    pub fn inverse(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::First => Cell::Second,
            Cell::Second => Cell::First,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::First => 'X',
            Cell::Second => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::First => Cell::First,
            Player::Second => Cell::Second,
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell as i8
    }
}
