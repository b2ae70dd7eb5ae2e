//! Per-card heuristic scoring.
//!
//! A card's score starts at its popularity rating and collects bonuses from
//! its own text: curve-friendly creatures, removal, pool-wide keyword and
//! creature-type synergies, and mana flexibility for lands. Scores are never
//! clamped.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, DeckEntry, Pool};
use crate::ratings::RatingIndex;

use super::frequency::{KeywordFrequency, KindredFrequency};
use super::removal::removal_score;

pub const CURVE_CREATURE_BONUS: f64 = 0.2;
pub const KEYWORD_BONUS_PER_USE: f64 = 0.15;
pub const KINDRED_BONUS: f64 = 0.2;
pub const KINDRED_MIN_FREQUENCY: u32 = 3;
pub const LAND_FLEXIBILITY_BONUS: f64 = 0.3;

/// Score one card. Pure: identical inputs always give the identical score.
#[must_use]
pub fn evaluate(
    card: &Card,
    ratings: &RatingIndex,
    keywords: &KeywordFrequency,
    kindred: &KindredFrequency,
) -> f64 {
    let text = card.lowered_text();
    let mut score = ratings.rating(&card.name);

    if card.is_creature() && (2.0..=4.0).contains(&card.cmc) {
        score += CURVE_CREATURE_BONUS;
    }

    score += removal_score(&text, card.is_instant_speed(), card.cmc);

    for (keyword, count) in keywords.iter() {
        if count > 1 && text.contains(&keyword.to_lowercase()) {
            score += KEYWORD_BONUS_PER_USE * f64::from(count);
        }
    }

    if card.type_line.has_creature_subtypes() {
        for subtype in card.type_line.subtypes() {
            if kindred.get(subtype) >= KINDRED_MIN_FREQUENCY {
                score += KINDRED_BONUS;
            }
        }
    }

    if card.is_land()
        && (text.contains("mana of any color") || (text.contains("add") && text.contains("mana")))
    {
        score += LAND_FLEXIBILITY_BONUS;
    }

    score
}

/// A pool entry with its score and its position in the pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub entry: DeckEntry,
    pub score: f64,
    /// Index in the source pool, used as the tie-break for equal scores.
    pub position: usize,
}

impl ScoredEntry {
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.entry.card
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.entry.count
    }
}

/// Scoring context for one pool: ratings plus the pool's own frequencies.
#[derive(Clone, Debug)]
pub struct CardScorer<'a> {
    ratings: &'a RatingIndex,
    keywords: KeywordFrequency,
    kindred: KindredFrequency,
}

impl<'a> CardScorer<'a> {
    /// Build a scorer whose frequencies come from `pool`.
    #[must_use]
    pub fn for_pool(pool: &Pool, ratings: &'a RatingIndex) -> Self {
        Self::with_frequencies(
            ratings,
            KeywordFrequency::from_pool(pool),
            KindredFrequency::from_pool(pool),
        )
    }

    #[must_use]
    pub fn with_frequencies(
        ratings: &'a RatingIndex,
        keywords: KeywordFrequency,
        kindred: KindredFrequency,
    ) -> Self {
        Self {
            ratings,
            keywords,
            kindred,
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &KeywordFrequency {
        &self.keywords
    }

    #[must_use]
    pub fn kindred(&self) -> &KindredFrequency {
        &self.kindred
    }

    #[must_use]
    pub fn score(&self, card: &Card) -> f64 {
        evaluate(card, self.ratings, &self.keywords, &self.kindred)
    }

    /// Score every entry, highest first; equal scores keep pool order.
    #[must_use]
    pub fn score_pool(&self, pool: &Pool) -> Vec<ScoredEntry> {
        let mut scored: Vec<ScoredEntry> = pool
            .iter()
            .enumerate()
            .map(|(position, entry)| ScoredEntry {
                entry: entry.clone(),
                score: self.score(&entry.card),
                position,
            })
            .collect();
        sort_by_score(&mut scored);
        scored
    }
}

/// Sort by descending score, then by pool position.
pub fn sort_by_score(entries: &mut [ScoredEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.position.cmp(&b.position))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn empty_context() -> (RatingIndex, KeywordFrequency, KindredFrequency) {
        (
            RatingIndex::new(),
            KeywordFrequency::default(),
            KindredFrequency::default(),
        )
    }

    #[test]
    fn test_neutral_card_scores_base_rating() {
        let (ratings, keywords, kindred) = empty_context();
        let card = Card::new("Divination", "Sorcery").with_oracle_text("Draw two cards.");
        assert!(approx(evaluate(&card, &ratings, &keywords, &kindred), 1.0));
    }

    #[test]
    fn test_rating_and_curve_creature() {
        let (_, keywords, kindred) = empty_context();
        let ratings: RatingIndex = [("Centaur Courser", 2.5)].into_iter().collect();
        let card = Card::new("Centaur Courser", "Creature — Centaur Warrior").with_mana_cost("{2}{G}", 3.0);
        assert!(approx(evaluate(&card, &ratings, &keywords, &kindred), 2.7));

        let big = Card::new("Colossal Dreadmaw", "Creature — Dinosaur").with_mana_cost("{4}{G}{G}", 6.0);
        assert!(approx(evaluate(&big, &ratings, &keywords, &kindred), 1.0));
    }

    #[test]
    fn test_removal_adds_to_base() {
        let (ratings, keywords, kindred) = empty_context();
        let murder = Card::new("Murder", "Instant")
            .with_mana_cost("{1}{B}{B}", 3.0)
            .with_oracle_text("Destroy target creature.");
        assert!(approx(evaluate(&murder, &ratings, &keywords, &kindred), 1.4));
    }

    #[test]
    fn test_keyword_bonus_scales_with_pool_frequency() {
        let (ratings, _, kindred) = empty_context();
        let keywords: KeywordFrequency = [("Flying", 3u32), ("Vigilance", 1u32)].into_iter().collect();
        let card = Card::new("Serra Angel", "Creature — Angel")
            .with_mana_cost("{3}{W}{W}", 5.0)
            .with_oracle_text("Flying, vigilance");

        // flying: 0.15 * 3; vigilance appears once pool-wide so no bonus
        assert!(approx(evaluate(&card, &ratings, &keywords, &kindred), 1.45));
    }

    #[test]
    fn test_kindred_bonus_applies_per_subtype() {
        let (ratings, keywords, _) = empty_context();
        let kindred: KindredFrequency = [("Elf", 4u32), ("Warrior", 3u32), ("Druid", 2u32)].into_iter().collect();
        let card = Card::new("Elvish Warrior", "Creature — Elf Warrior Druid").with_mana_cost("{G}{G}", 2.0);

        // base 1.0 + curve 0.2 + two qualifying subtypes
        assert!(approx(evaluate(&card, &ratings, &keywords, &kindred), 1.6));
    }

    #[test]
    fn test_land_flexibility_bonus() {
        let (ratings, keywords, kindred) = empty_context();
        let land = Card::new("Evolving Cairn", "Land")
            .with_oracle_text("{T}: Add one mana of any color.");
        assert!(approx(evaluate(&land, &ratings, &keywords, &kindred), 1.3));

        let spell = Card::new("Manamorphose", "Instant").with_oracle_text("Add two mana in any combination of colors.");
        assert!(approx(evaluate(&spell, &ratings, &keywords, &kindred), 1.0));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let pool = Deck::from_counts([(
            Card::new("Wind Drake", "Creature — Drake")
                .with_mana_cost("{2}{U}", 3.0)
                .with_oracle_text("Flying")
                .with_keywords(["Flying"]),
            2,
        )])
        .unwrap();
        let ratings = RatingIndex::new();
        let scorer = CardScorer::for_pool(&pool, &ratings);
        let card = &pool.entries()[0].card;

        let first = scorer.score(card);
        for _ in 0..10 {
            assert_eq!(scorer.score(card).to_bits(), first.to_bits());
        }
        assert!(first.is_finite());
    }

    #[test]
    fn test_score_pool_sorts_with_stable_ties() {
        let ratings: RatingIndex = [("Best", 3.0)].into_iter().collect();
        let pool = Deck::from_counts([
            (Card::new("First", "Sorcery"), 1),
            (Card::new("Best", "Sorcery"), 1),
            (Card::new("Second", "Sorcery"), 2),
        ])
        .unwrap();

        let scored = CardScorer::for_pool(&pool, &ratings).score_pool(&pool);
        let names: Vec<_> = scored.iter().map(|s| s.card().name.as_str()).collect();
        assert_eq!(names, vec!["Best", "First", "Second"]);
        assert_eq!(scored[2].count(), 2);
        assert_eq!(scored[0].position, 1);
    }
}
