//! Play command - play a game against the computer.

use gomoku::game::r#loop::GameLoop;
use structopt::StructOpt;

use super::util::{create_config, FirstMover};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(short, long, default_value = "engine")]
    pub first: FirstMover,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.first);
        let mut game = GameLoop::new(config);
        game.run();
    }
}
