//! Deck construction pipeline.
//!
//! ## Stages
//!
//! 1. `ColorIdentifier`: main colors and splash options from scored entries
//! 2. `CurveConstrainedSelector`: spells under the target curve
//! 3. `ManaBaseBuilder`: utility and fixing lands, then basics
//! 4. `DeckAssembler`: runs the stages and emits the deck
//!
//! `lands` holds the land classification shared by stages 1 and 3.

pub mod assembler;
pub mod colors;
pub mod lands;
pub mod mana_base;
pub mod selector;

pub use assembler::{DeckAssembler, DeckBuild};
pub use colors::{ColorIdentifier, ColorIdentity, ColorTally, MAIN_COLOR_COUNT};
pub use lands::{FixingKind, LandProfile, LandRole};
pub use mana_base::{BasicCounts, LandPick, ManaBase, ManaBaseBuilder};
pub use selector::{CurveConstrainedSelector, Pick, Relaxation, Selection};
