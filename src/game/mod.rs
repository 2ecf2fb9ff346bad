pub mod background_mover;
pub mod display;
pub mod engine;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`

pub use background_mover::BackgroundMover;
pub use engine::{Engine, EngineConfig, EngineError};
