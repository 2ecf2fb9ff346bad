//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "gomoku",
    about = "A gomoku engine on an unbounded board, implemented in Rust"
)]
pub enum Gomoku {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for the best move using alpha-beta pruning at the given `--depth` (default: 3). Who opens is chosen with `--first engine|human|random` (default: engine). Enter moves as `x y` or `x,y`; `quit` leaves the game."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "best-move",
        about = "Replay the moves given with `--moves \"x,y;x,y;...\"` from an empty board and print the engine's move for the resulting position. The engine must be the side to move. Search depth is set with `--depth` (default: 3)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Gomoku {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            BestMove(cmd),
        }
    }
}
