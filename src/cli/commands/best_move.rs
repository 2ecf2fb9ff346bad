//! Best move command - determine the engine's move after a list of moves.

use gomoku::game::engine::Engine;
use gomoku::input_handler::parse_action_list;
use structopt::StructOpt;

use super::util::{create_config, FirstMover};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short, long, default_value = "engine")]
    pub first: FirstMover,
    #[structopt(short, long, default_value = "")]
    pub moves: String,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let actions = match parse_action_list(&self.moves) {
            Ok(actions) => actions,
            Err(err) => {
                eprintln!("Failed to parse moves: {}", err);
                return;
            }
        };

        let mut engine = Engine::with_config(create_config(self.depth, self.first));
        for action in actions {
            if let Err(err) = engine.make_move(action) {
                eprintln!("Cannot play {}: {}", action, err);
                return;
            }
        }

        match engine.best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
