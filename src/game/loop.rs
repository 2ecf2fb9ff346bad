use std::thread;
use std::time::{Duration, Instant};

use crate::board::Action;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::input_handler::{parse_move_input, InputError, MoveInput};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Console game between a human and the engine. The human enters moves on
/// stdin while the engine's replies are searched in the background and
/// polled for, the way an event loop would.
pub struct GameLoop {
    engine: Engine,
    ui: GameDisplay,
}

impl GameLoop {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
        }
    }

    pub fn run(&mut self) {
        let mut stats: Option<String> = None;

        loop {
            let state = self.engine.state();
            self.ui.render_game_state(state, stats.as_deref());

            if state.is_terminal() {
                match state.winner() {
                    Some(Engine::ENGINE_PLAYER) => println!("The engine wins."),
                    Some(_) => println!("You win!"),
                    None => {}
                }
                break;
            }

            if self.engine.is_engine_turn() {
                let started = Instant::now();
                match self.wait_for_engine() {
                    Ok(action) => {
                        stats = Some(format!(
                            "Engine played {} after {:.2?}",
                            action,
                            started.elapsed()
                        ));
                    }
                    Err(error) => {
                        println!("error: {}", error);
                        break;
                    }
                }
                continue;
            }

            match parse_move_input() {
                Ok(MoveInput::Coordinate { action }) => match self.engine.make_move(action) {
                    Ok(()) => stats = None,
                    Err(error) => stats = Some(format!("error: {}", error)),
                },
                Ok(MoveInput::Quit) | Err(InputError::UserExit) => break,
                Err(InputError::IOError { error }) => {
                    println!("io error: {}", error);
                    break;
                }
                Err(error) => stats = Some(format!("error: {}", error)),
            }
        }
    }

    fn wait_for_engine(&mut self) -> Result<Action, EngineError> {
        self.engine.start_thinking()?;
        println!("{} is thinking...", Engine::ENGINE_PLAYER);

        loop {
            let finished = !self.engine.is_thinking();
            if let Some(action) = self.engine.poll_engine_move()? {
                return Ok(action);
            }
            if finished {
                return Err(EngineError::NoMoveFound);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}
