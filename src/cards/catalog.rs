//! Card catalog for name lookup.
//!
//! The `CardCatalog` stores every card fetched for a set and resolves names
//! case-insensitively. Pool lists and sealed pool generation draw from it.
//!
//! ## Example
//!
//! ```
//! use sealed_builder::cards::{Card, CardCatalog};
//!
//! let mut catalog = CardCatalog::new();
//! catalog.register(Card::new("Lightning Bolt", "Instant"));
//!
//! let found = catalog.get("lightning bolt").unwrap();
//! assert_eq!(found.name, "Lightning Bolt");
//! ```

use rustc_hash::FxHashMap;

use crate::core::DeckError;

use super::card::{Card, Rarity};

#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON array of catalog records.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Ok(cards.into_iter().collect())
    }

    /// Register a card. A later card with the same name replaces the earlier one.
    pub fn register(&mut self, card: Card) {
        let key = card.key();
        match self.by_name.get(&key) {
            Some(&index) => self.cards[index] = card,
            None => {
                self.by_name.insert(key, self.cards.len());
                self.cards.push(card);
            }
        }
    }

    /// Look up a card by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.cards[index])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.rarity == rarity)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

impl FromIterator<Card> for CardCatalog {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.register(card);
        }
        catalog
    }
}
