//! Deck construction parameters.
//!
//! The defaults describe a 40-card limited deck: 23 spells on a fixed mana
//! curve and 17 lands. Callers may load overrides from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Lowest and highest curve bucket. Costs outside are clamped into range.
pub const MIN_CURVE_BUCKET: u8 = 1;
pub const MAX_CURVE_BUCKET: u8 = 6;

/// Parameters for every stage of deck construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Total cards in the finished deck.
    pub deck_size: u32,

    /// Nonland cards the selector tries to pick.
    pub spell_target: u32,

    /// Lands in the mana base, basics included.
    pub land_target: u32,

    /// Per-bucket caps enforced during the first selection pass.
    pub curve: BTreeMap<u8, u32>,

    /// Cap for buckets missing from `curve`.
    pub default_bucket_target: u32,

    /// Minimum score for an off-color card to be splashed.
    pub splash_score_floor: f64,

    /// Minimum weighted mana sources for a color to be splash-eligible.
    pub splash_source_threshold: f64,

    /// Minimum score for a utility land to make the mana base.
    pub utility_land_floor: f64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            deck_size: 40,
            spell_target: 23,
            land_target: 17,
            curve: BTreeMap::from([(1, 2), (2, 5), (3, 5), (4, 4), (5, 3), (6, 2)]),
            default_bucket_target: 2,
            splash_score_floor: 3.5,
            splash_source_threshold: 2.5,
            utility_land_floor: 3.0,
        }
    }
}

impl BuilderConfig {
    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Curve bucket for a mana value: floor, clamped to [1, 6].
    #[must_use]
    pub fn bucket_for(cmc: f64) -> u8 {
        let floored = cmc.floor();
        if floored.is_nan() || floored < f64::from(MIN_CURVE_BUCKET) {
            MIN_CURVE_BUCKET
        } else if floored > f64::from(MAX_CURVE_BUCKET) {
            MAX_CURVE_BUCKET
        } else {
            floored as u8
        }
    }

    /// Cap for a curve bucket.
    #[must_use]
    pub fn bucket_target(&self, bucket: u8) -> u32 {
        self.curve
            .get(&bucket)
            .copied()
            .unwrap_or(self.default_bucket_target)
    }

    #[must_use]
    pub fn with_spell_target(mut self, target: u32) -> Self {
        self.spell_target = target;
        self
    }

    #[must_use]
    pub fn with_land_target(mut self, target: u32) -> Self {
        self.land_target = target;
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: u32) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_bucket_target(mut self, bucket: u8, target: u32) -> Self {
        self.curve.insert(bucket, target);
        self
    }

    #[must_use]
    pub fn with_splash_score_floor(mut self, floor: f64) -> Self {
        self.splash_score_floor = floor;
        self
    }
}
