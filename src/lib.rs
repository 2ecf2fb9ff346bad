pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod state;

pub use alpha_beta_searcher::{AlphaBetaSearcher, MoveOrderer, SearchError};
pub use board::{Action, GrowableGrid, Player};
pub use game::BackgroundMover;
pub use state::GameState;
