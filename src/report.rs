//! Reporting helpers over finished builds.
//!
//! Rendering is left to callers; these functions only gather the numbers a
//! deck listing shows.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::eval::{CardScorer, ScoredEntry};

/// One line of a score listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardScore {
    pub name: String,
    pub amount: u32,
    pub score: f64,
}

/// Score of every deck entry, in deck order.
#[must_use]
pub fn breakdown(deck: &Deck, scorer: &CardScorer<'_>) -> Vec<CardScore> {
    deck.iter()
        .map(|entry| CardScore {
            name: entry.card.name.clone(),
            amount: entry.count,
            score: scorer.score(&entry.card),
        })
        .collect()
}

/// Pool copies left out of the deck, best first.
///
/// Basic lands are left out: any number of them is always available.
#[must_use]
pub fn other_playables(scored: &[ScoredEntry], deck: &Deck) -> Vec<CardScore> {
    scored
        .iter()
        .filter(|s| !s.card().type_line.is_basic_land())
        .filter_map(|s| {
            let left = s.count().saturating_sub(deck.count_of(&s.card().name));
            (left > 0).then(|| CardScore {
                name: s.card().name.clone(),
                amount: left,
                score: s.score,
            })
        })
        .collect()
}

/// Deck entries per card category. A card is counted in every category it
/// belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub creatures: usize,
    /// Instants and sorceries.
    pub spells: usize,
    pub artifacts: usize,
    pub enchantments: usize,
    pub lands: usize,
}

impl Composition {
    #[must_use]
    pub fn of(deck: &Deck) -> Self {
        let mut composition = Self::default();
        for entry in deck {
            let types = &entry.card.type_line;
            if types.is_creature() {
                composition.creatures += 1;
            }
            if types.is("Instant") || types.is("Sorcery") {
                composition.spells += 1;
            }
            if types.is("Artifact") {
                composition.artifacts += 1;
            }
            if types.is("Enchantment") {
                composition.enchantments += 1;
            }
            if types.is_land() {
                composition.lands += 1;
            }
        }
        composition
    }
}

/// Color codes of a card in WUBRG order, "C" for colorless.
#[must_use]
pub fn color_string(card: &Card) -> String {
    card.colors.codes()
}
