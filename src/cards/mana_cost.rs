//! Mana symbol parsing.
//!
//! Costs are written in brace syntax ("{2}{R}{R}"). Only single-letter colored
//! tokens count as colored symbols; hybrid and phyrexian symbols do not.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorSet};

/// Colored symbols of a cost string, in order of appearance.
pub fn colored_symbols(cost: &str) -> impl Iterator<Item = Color> + '_ {
    cost.split(['{', '}'])
        .filter(|token| token.len() == 1)
        .filter_map(|token| token.chars().next().and_then(Color::from_symbol))
}

/// Colors a permanent can produce through "Add ..." mana abilities.
///
/// Only symbols after the word "add" in the same sentence count, so colored
/// activation costs ("{2}{G}, {T}: Draw a card.") are ignored.
#[must_use]
pub fn produced_colors(oracle_text: &str) -> ColorSet {
    let mut colors = ColorSet::new();
    for sentence in oracle_text.split(['.', '\n']) {
        let lowered = sentence.to_ascii_lowercase();
        let Some(start) = lowered.find("add ") else {
            continue;
        };
        colors = colors.union(colored_symbols(&sentence[start..]).collect());
    }
    colors
}

/// Colored symbol tally per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCounts([u32; 5]);

impl SymbolCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the colored symbols of `cost`, `copies` times.
    pub fn add_cost(&mut self, cost: &str, copies: u32) {
        for color in colored_symbols(cost) {
            self.0[color.priority()] += copies;
        }
    }

    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.0[color.priority()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Total over the colors in `set` only.
    #[must_use]
    pub fn total_in(&self, set: ColorSet) -> u32 {
        set.iter().map(|c| self.get(c)).sum()
    }

    /// Colors of `set` ordered by symbol count, highest first, W > U > B > R > G on ties.
    #[must_use]
    pub fn ranked(&self, set: ColorSet) -> Vec<Color> {
        let mut colors: Vec<Color> = set.iter().collect();
        colors.sort_by(|a, b| {
            self.get(*b)
                .cmp(&self.get(*a))
                .then(a.priority().cmp(&b.priority()))
        });
        colors
    }
}
