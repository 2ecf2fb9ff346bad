//! Shared utilities for CLI commands.

use std::str::FromStr;

use gomoku::board::Player;
use gomoku::game::engine::{Engine, EngineConfig};

/// Who places the first stone. The engine always plays `Player::First`, so
/// this maps onto the player that opens the game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FirstMover {
    Engine,
    Human,
    Random,
}

impl FirstMover {
    pub fn starting_player(self) -> Player {
        match self {
            FirstMover::Engine => Engine::ENGINE_PLAYER,
            FirstMover::Human => Engine::ENGINE_PLAYER.opponent(),
            FirstMover::Random => Player::random(),
        }
    }
}

// used for parsing cli args
impl FromStr for FirstMover {
    type Err = &'static str;

    fn from_str(first: &str) -> Result<Self, Self::Err> {
        match first {
            "engine" => Ok(FirstMover::Engine),
            "human" => Ok(FirstMover::Human),
            "random" => Ok(FirstMover::Random),
            _ => Err("invalid first mover; options are: engine, human, random"),
        }
    }
}

pub(crate) fn create_config(depth: u8, first: FirstMover) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        first_player: first.starting_player(),
    }
}
