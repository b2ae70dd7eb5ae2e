//! Land classification.
//!
//! Every land falls into one role:
//!
//! - **Basic**: a basic land type, one color.
//! - **Fixing**: produces or fetches two or more colors.
//! - **Utility**: not fixing, but has a non-mana effect (draw, scry,
//!   investigate, tokens).
//! - **Plain**: anything else.
//!
//! Each land also counts as a weighted mana source for the colors it fixes:
//! fetch effects 0.5, tapped duals 0.8, everything else 1.0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{produced_colors, Card};
use crate::core::{Color, ColorSet};

const UTILITY_PHRASES: [&str; 5] = ["draw", "scry", "investigate", "create", "token"];
const ANY_COLOR_PHRASES: [&str; 2] = ["mana of any color", "choose a color"];
const TAPPED_PHRASES: [&str; 2] = ["enters tapped", "enters the battlefield tapped"];

/// How a fixing land delivers its colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixingKind {
    /// Searches the library for a land.
    Fetch,
    /// Enters tapped.
    TappedDual,
    /// Untapped dual or any-color land.
    Untapped,
}

impl FixingKind {
    #[must_use]
    pub const fn source_weight(self) -> f64 {
        match self {
            FixingKind::Fetch => 0.5,
            FixingKind::TappedDual => 0.8,
            FixingKind::Untapped => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandRole {
    Basic,
    Fixing(FixingKind),
    Utility,
    Plain,
}

/// Classification of one land card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandProfile {
    pub role: LandRole,
    /// Colors the land produces or fetches.
    pub colors: ColorSet,
}

impl LandProfile {
    /// Classify a card; `None` for nonlands.
    #[must_use]
    pub fn of(card: &Card) -> Option<Self> {
        if !card.is_land() {
            return None;
        }

        let text = card.lowered_text();
        let fetches = text.contains("search your library for") && text.contains("land");
        let colors = fixable_colors(card, &text, fetches);

        let role = if card.type_line.is_basic_land() {
            LandRole::Basic
        } else if colors.count() >= 2 {
            let kind = if fetches {
                FixingKind::Fetch
            } else if TAPPED_PHRASES.iter().any(|p| text.contains(p)) {
                FixingKind::TappedDual
            } else {
                FixingKind::Untapped
            };
            LandRole::Fixing(kind)
        } else if UTILITY_PHRASES.iter().any(|p| text.contains(p)) {
            LandRole::Utility
        } else {
            LandRole::Plain
        };

        debug!(land = %card.name, ?role, colors = %colors.codes(), "classified land");
        Some(Self { role, colors })
    }

    #[must_use]
    pub fn is_fixing(&self) -> bool {
        matches!(self.role, LandRole::Fixing(_))
    }

    #[must_use]
    pub fn is_utility(&self) -> bool {
        self.role == LandRole::Utility
    }

    /// Weight of this land as a source of each of its colors.
    #[must_use]
    pub fn source_weight(&self) -> f64 {
        match self.role {
            LandRole::Fixing(kind) => kind.source_weight(),
            _ => 1.0,
        }
    }
}

fn fixable_colors(card: &Card, text: &str, fetches: bool) -> ColorSet {
    if ANY_COLOR_PHRASES.iter().any(|p| text.contains(p)) {
        return ColorSet::ALL;
    }

    if fetches {
        let named: ColorSet = Color::ALL
            .into_iter()
            .filter(|c| text.contains(&c.basic_land_name().to_lowercase()))
            .collect();
        if named.is_empty() && text.contains("basic land") {
            return ColorSet::ALL;
        }
        return named;
    }

    let typed: ColorSet = card
        .type_line
        .subtypes()
        .iter()
        .filter_map(|s| Color::from_basic_land_type(s))
        .collect();
    produced_colors(&card.oracle_text).union(typed)
}
