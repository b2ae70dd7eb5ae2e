//! Pairwise and deck-wide synergy scores.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};

use super::rules::SynergyRuleSet;

/// Weight of one matched tag pair per copy of each card.
pub const LINK_WEIGHT: f64 = 0.25;
/// Density bonus per prevalent tag in a pair's links.
pub const DENSITY_STEP: f64 = 0.25;
/// Deck-wide copies a tag needs to count as prevalent.
pub const DENSITY_MIN_OCCURRENCE: u32 = 4;
/// Penalty for Auras in a deck with few creatures.
pub const AURA_PENALTY: f64 = -1.0;
/// Creature entries below which Auras are penalized.
pub const AURA_MIN_CREATURES: usize = 5;

/// A positive synergy between two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynergyLink {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Synergy evaluator over a shared rule table.
#[derive(Clone, Copy, Debug)]
pub struct SynergyGraph<'a> {
    rules: &'a SynergyRuleSet,
}

impl<'a> SynergyGraph<'a> {
    #[must_use]
    pub fn new(rules: &'a SynergyRuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &SynergyRuleSet {
        self.rules
    }

    #[must_use]
    pub fn classify(&self, card: &Card) -> BTreeSet<String> {
        self.rules.classify(card)
    }

    /// Synergy of `a` toward `b`, scaled by copies of each.
    #[must_use]
    pub fn pair_score(&self, a: &Card, a_count: u32, b: &Card, b_count: u32) -> f64 {
        let a_tags = self.classify(a);
        let b_tags = self.classify(b);
        self.links_between(&a_tags, &b_tags).len() as f64 * LINK_WEIGHT * f64::from(a_count) * f64::from(b_count)
    }

    /// Sum of pair scores over every pair of entries, density weighted, with
    /// the Aura penalty applied once.
    #[must_use]
    pub fn deck_score(&self, deck: &Deck) -> f64 {
        let entries = deck.entries();
        let tags: Vec<BTreeSet<String>> = entries.iter().map(|e| self.classify(&e.card)).collect();

        let mut occurrence: BTreeMap<&str, u32> = BTreeMap::new();
        for (entry, entry_tags) in entries.iter().zip(&tags) {
            for tag in entry_tags {
                *occurrence.entry(tag.as_str()).or_insert(0) += entry.count;
            }
        }

        let mut score = 0.0;
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let links = self.links_between(&tags[i], &tags[j]);
                if links.is_empty() {
                    continue;
                }

                let involved: BTreeSet<&str> = links.iter().flat_map(|(a, b)| [*a, *b]).collect();
                let prevalent = involved
                    .iter()
                    .filter(|t| occurrence.get(*t).copied().unwrap_or(0) >= DENSITY_MIN_OCCURRENCE)
                    .count();
                let density = 1.0 + DENSITY_STEP * prevalent as f64;

                let base = links.len() as f64
                    * LINK_WEIGHT
                    * f64::from(entries[i].count)
                    * f64::from(entries[j].count);
                score += base * density;
            }
        }

        let has_aura = entries.iter().any(|e| e.card.type_line.has_subtype("Aura"));
        let creatures = entries.iter().filter(|e| e.card.is_creature()).count();
        if has_aura && creatures < AURA_MIN_CREATURES {
            score += AURA_PENALTY;
        }

        score
    }

    /// Every positive pair weight at one copy each, strongest first, names
    /// ascending on ties.
    #[must_use]
    pub fn links(&self, deck: &Deck) -> Vec<SynergyLink> {
        let entries = deck.entries();
        let mut links = Vec::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let weight = self.pair_score(&entries[i].card, 1, &entries[j].card, 1);
                if weight > 0.0 {
                    links.push(SynergyLink {
                        from: entries[i].card.name.clone(),
                        to: entries[j].card.name.clone(),
                        weight,
                    });
                }
            }
        }
        links.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.from.cmp(&b.from))
                .then_with(|| a.to.cmp(&b.to))
        });
        links
    }

    /// Matched (tag of a, tag of b) affinity pairs.
    fn links_between<'t>(
        &self,
        a_tags: &'t BTreeSet<String>,
        b_tags: &'t BTreeSet<String>,
    ) -> Vec<(&'t str, &'t str)> {
        a_tags
            .iter()
            .flat_map(|a| b_tags.iter().map(move |b| (a.as_str(), b.as_str())))
            .filter(|(a, b)| self.rules.has_affinity(a, b))
            .collect()
    }
}
