//! Core building blocks: colors, configuration, errors and the pool RNG.
//!
//! Nothing here knows about scoring or selection. The pipeline stages in
//! `eval`, `build` and `synergy` depend on these types, never the reverse.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{Color, ColorSet};
pub use config::{BuilderConfig, MAX_CURVE_BUCKET, MIN_CURVE_BUCKET};
pub use error::DeckError;
pub use rng::{PoolRng, PoolRngState};
