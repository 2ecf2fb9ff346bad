mod cli;

use cli::commands::Command;
use cli::Gomoku;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Gomoku::from_args().execute();
}
