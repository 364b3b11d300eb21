//! Calcul Core - Mental arithmetic drill automaton
//!
//! This crate provides the game logic for an addition drill:
//! - Problem generation with an anti-repeat rule (`Game`)
//! - Answer capture, scoring and run timing
//! - A pure projection of the state into a `ViewModel`
//!
//! ## Collaborators
//!
//! The automaton never touches a terminal or a window. It talks to:
//! - `Clock` - supplies timestamps (`SystemClock`, `ManualClock`)
//! - `RandomSource` - draws integers in a range (`GameRng`)
//! - `Screen` - renders a `ViewModel` (implemented by front ends)

mod automaton;
mod config;
mod display;
mod error;
mod key;
mod rng;
mod state;
pub mod time;
mod view;

pub use automaton::{Game, Transition, UpdateResult};
pub use config::{usage, GameConfig};
pub use display::Screen;
pub use error::{ConfigError, Result};
pub use key::Key;
pub use rng::{GameRng, RandomSource};
pub use state::{GameState, Problem, Status};
pub use time::{Clock, ManualClock, SystemClock, Timestamp, REFRESH_INTERVAL};
pub use view::{project, Correctness, ViewModel};
