//! Color identity of a pool.
//!
//! Each colored card contributes `score × count` to each of its colors.
//! Fixing lands contribute a flat weight per fixable color instead (0.5 for
//! fetches, 0.8 for tapped duals, 1.0 otherwise). The two best colors become
//! the main colors; ties fall to the raw card count of the color, then to
//! W > U > B > R > G.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BuilderConfig, Color, ColorSet};
use crate::eval::ScoredEntry;

use super::lands::LandProfile;

/// Number of main colors a deck is built around.
pub const MAIN_COLOR_COUNT: usize = 2;

/// Per-color tallies indexed by `Color::priority`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorTally {
    pub score: [f64; 5],
    pub cards: [u32; 5],
    pub sources: [f64; 5],
}

impl ColorTally {
    #[must_use]
    pub fn score(&self, color: Color) -> f64 {
        self.score[color.priority()]
    }

    #[must_use]
    pub fn cards(&self, color: Color) -> u32 {
        self.cards[color.priority()]
    }

    /// Weighted mana sources of a color across the pool's lands.
    #[must_use]
    pub fn sources(&self, color: Color) -> f64 {
        self.sources[color.priority()]
    }
}

/// Main colors and splash options for a pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorIdentity {
    /// At most two colors, best first.
    pub main: Vec<Color>,
    /// Non-main colors with enough mana sources to splash.
    pub splashable: ColorSet,
    pub tally: ColorTally,
}

impl ColorIdentity {
    #[must_use]
    pub fn main_set(&self) -> ColorSet {
        self.main.iter().copied().collect()
    }

    #[must_use]
    pub fn is_main(&self, color: Color) -> bool {
        self.main.contains(&color)
    }

    /// True if a card of `colors` is on-color: colorless, or sharing a main color.
    #[must_use]
    pub fn is_on_color(&self, colors: ColorSet) -> bool {
        colors.is_empty() || colors.intersects(self.main_set())
    }

    /// True if every one of `colors` is splash-eligible.
    #[must_use]
    pub fn can_splash(&self, colors: ColorSet) -> bool {
        !colors.is_empty() && self.splashable.contains_all(colors)
    }
}

/// Derives a `ColorIdentity` from scored pool entries.
#[derive(Clone, Debug)]
pub struct ColorIdentifier<'a> {
    config: &'a BuilderConfig,
}

impl<'a> ColorIdentifier<'a> {
    #[must_use]
    pub fn new(config: &'a BuilderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn identify(&self, scored: &[ScoredEntry]) -> ColorIdentity {
        let mut tally = ColorTally::default();
        let mut present = ColorSet::new();

        for item in scored {
            let card = item.card();
            let copies = f64::from(item.count());
            let profile = LandProfile::of(card);

            if let Some(profile) = profile {
                for color in profile.colors.iter() {
                    tally.sources[color.priority()] += profile.source_weight() * copies;
                }
            }

            match profile {
                Some(profile) if profile.is_fixing() => {
                    for color in profile.colors.iter() {
                        tally.score[color.priority()] += profile.source_weight() * copies;
                        present.insert(color);
                    }
                }
                _ => {
                    for color in card.colors.iter() {
                        tally.score[color.priority()] += item.score * copies;
                        tally.cards[color.priority()] += item.count();
                        present.insert(color);
                    }
                }
            }
        }

        let mut ranked: Vec<Color> = present.iter().collect();
        ranked.sort_by(|a, b| {
            tally
                .score(*b)
                .total_cmp(&tally.score(*a))
                .then(tally.cards(*b).cmp(&tally.cards(*a)))
                .then(a.priority().cmp(&b.priority()))
        });
        ranked.truncate(MAIN_COLOR_COUNT);

        let splashable: ColorSet = Color::ALL
            .into_iter()
            .filter(|c| !ranked.contains(c))
            .filter(|c| tally.sources(*c) >= self.config.splash_source_threshold)
            .collect();

        debug!(
            main = ?ranked,
            splashable = %splashable.codes(),
            "identified main colors"
        );

        ColorIdentity {
            main: ranked,
            splashable,
            tally,
        }
    }
}
