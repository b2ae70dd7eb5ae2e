//! Decks and pools as ordered, name-unique entry lists.
//!
//! A `Deck` keeps insertion order and never holds two entries for the same
//! card name (compared case-insensitively). Counts are always at least 1.

use serde::{Deserialize, Serialize};

use crate::core::DeckError;

use super::card::Card;

/// A card and how many copies of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card: Card,
    pub count: u32,
}

impl DeckEntry {
    /// Create an entry, rejecting zero or negative counts.
    pub fn new(card: Card, count: i64) -> Result<Self, DeckError> {
        let count = validate_count(&card.name, count)?;
        Ok(Self { card, count })
    }
}

fn validate_count(name: &str, count: i64) -> Result<u32, DeckError> {
    u32::try_from(count)
        .ok()
        .filter(|c| *c >= 1)
        .ok_or_else(|| DeckError::InvalidCount {
            name: name.to_string(),
            count,
        })
}

/// An ordered collection of entries: a candidate pool or a finished deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

/// The candidate card collection before selection.
pub type Pool = Deck;

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies of a card, merging with an existing entry of the same name.
    pub fn add(&mut self, card: Card, count: i64) -> Result<(), DeckError> {
        let count = validate_count(&card.name, count)?;
        let key = card.key();
        match self.entries.iter_mut().find(|e| e.card.key() == key) {
            Some(existing) => existing.count += count,
            None => self.entries.push(DeckEntry { card, count }),
        }
        Ok(())
    }

    /// Add one copy of a card.
    pub fn add_one(&mut self, card: Card) {
        let key = card.key();
        match self.entries.iter_mut().find(|e| e.card.key() == key) {
            Some(existing) => existing.count += 1,
            None => self.entries.push(DeckEntry { card, count: 1 }),
        }
    }

    /// Build from (card, count) pairs, merging duplicates.
    pub fn from_counts<I>(items: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = (Card, i64)>,
    {
        let mut deck = Self::new();
        for (card, count) in items {
            deck.add(card, count)?;
        }
        Ok(deck)
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeckEntry> {
        self.entries.iter()
    }

    /// Entry for a card name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| e.card.same_name(name))
    }

    /// Copies of a card name, 0 if absent.
    #[must_use]
    pub fn count_of(&self, name: &str) -> u32 {
        self.get(name).map_or(0, |e| e.count)
    }

    /// Sum of all entry counts.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lands(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter().filter(|e| e.card.is_land())
    }

    pub fn nonlands(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter().filter(|e| !e.card.is_land())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a DeckEntry;
    type IntoIter = std::slice::Iter<'a, DeckEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
