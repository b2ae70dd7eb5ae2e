//! # sealed-builder
//!
//! Builds a 40-card limited deck from a sealed pool.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Scoring, color identification, spell selection and
//!    mana base construction are pure functions of their inputs. Only sealed
//!    pool generation uses an RNG, and it is seeded.
//!
//! 2. **Shortfalls, Not Errors**: Thin pools produce the best deck they can
//!    plus a count of the missing slots. Errors are reserved for malformed
//!    input (bad counts, unknown colors, incomplete card records).
//!
//! 3. **Configuration Over Convention**: Deck size, curve targets, splash
//!    thresholds and synergy rules are data, loaded once and shared by
//!    reference.
//!
//! ## Pipeline
//!
//! pool → `CardScorer` → `ColorIdentifier` → `CurveConstrainedSelector` →
//! `ManaBaseBuilder` → `DeckAssembler` → deck. `SynergyGraph` scores any
//! deck on the side.
//!
//! ## Modules
//!
//! - `core`: Colors, configuration, errors, RNG
//! - `cards`: Card records, type lines, mana symbols, decks, catalog, pool lists
//! - `ratings`: Popularity ratings
//! - `eval`: Per-card scoring
//! - `build`: Color identity, spell selection, mana base, assembly
//! - `synergy`: Synergy tags, rules and scores
//! - `sealed`: Sealed pool simulation
//! - `report`: Score breakdowns and deck composition

pub mod core;
pub mod cards;
pub mod ratings;
pub mod eval;
pub mod build;
pub mod synergy;
pub mod sealed;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorSet,
    BuilderConfig, DeckError,
    PoolRng, PoolRngState,
};

pub use crate::cards::{
    Card, CardRecord, Rarity, TypeLine,
    Deck, DeckEntry, Pool,
    CardCatalog, PoolListing, parse_pool_list,
};

pub use crate::ratings::RatingIndex;

pub use crate::eval::{evaluate, CardScorer, KeywordFrequency, KindredFrequency, ScoredEntry};

pub use crate::build::{
    ColorIdentifier, ColorIdentity,
    CurveConstrainedSelector, Relaxation, Selection,
    ManaBaseBuilder, ManaBase,
    DeckAssembler, DeckBuild,
};

pub use crate::synergy::{
    CardPredicate, CustomPredicates,
    SynergyConfig, SynergyRule, SynergyRuleSet,
    SynergyGraph, SynergyLink,
};

pub use crate::sealed::SealedGenerator;

pub use crate::report::{CardScore, Composition};
