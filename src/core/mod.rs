//! Shared vocabulary for both search engines: actors, errors, RNG.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{EngineError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{SearchRng, SearchRngState};
