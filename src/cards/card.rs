//! Card records.
//!
//! A `Card` is immutable once ingested. It deserializes straight from the
//! catalog's JSON shape (`CardRecord`); the conversion rejects records that
//! miss a name, a type line, or oracle text.
//!
//! ## Example
//!
//! ```
//! use sealed_builder::cards::Card;
//! use sealed_builder::core::Color;
//!
//! let bear = Card::new("Grizzly Bears", "Creature — Bear")
//!     .with_mana_cost("{1}{G}", 2.0)
//!     .with_colors(Color::Green);
//!
//! assert!(bear.is_creature());
//! assert_eq!(bear.key(), "grizzly bears");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorSet, DeckError};

use super::type_line::TypeLine;

/// Printed rarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Mythic,
    #[serde(other)]
    Special,
}

/// An immutable card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub mana_cost: String,
    pub cmc: f64,
    pub type_line: TypeLine,
    pub oracle_text: String,
    pub colors: ColorSet,
    pub rarity: Rarity,
    pub power: String,
    pub toughness: String,
    pub loyalty: String,
    pub keywords: Vec<String>,
}

impl Card {
    /// Create a card with a name and type line; everything else empty.
    #[must_use]
    pub fn new(name: impl Into<String>, type_line: &str) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            mana_cost: String::new(),
            cmc: 0.0,
            type_line: TypeLine::parse(type_line),
            oracle_text: String::new(),
            colors: ColorSet::new(),
            rarity: Rarity::Common,
            power: String::new(),
            toughness: String::new(),
            loyalty: String::new(),
            keywords: Vec::new(),
        }
    }

    /// The basic land that taps for `color`.
    #[must_use]
    pub fn basic_land(color: Color) -> Self {
        let name = color.basic_land_name();
        Self::new(name, &format!("Basic Land — {name}"))
            .with_oracle_text(format!("({{T}}: Add {{{}}}.)", color.code()))
    }

    /// The basic land for a color code, failing on codes outside WUBRG.
    pub fn basic_land_for_code(code: &str) -> Result<Self, DeckError> {
        Ok(Self::basic_land(Color::from_code(code)?))
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>, cmc: f64) -> Self {
        self.mana_cost = cost.into();
        self.cmc = cmc;
        self
    }

    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = text.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<ColorSet>) -> Self {
        self.colors = colors.into();
        self
    }

    /// Set colors from WUBRG codes, e.g. "UR". Any other letter is an
    /// `UnknownColor` error.
    pub fn with_color_codes(self, codes: &str) -> Result<Self, DeckError> {
        Ok(self.with_colors(codes.parse::<ColorSet>()?))
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_stats(mut self, power: &str, toughness: &str) -> Self {
        self.power = power.to_string();
        self.toughness = toughness.to_string();
        self
    }

    /// Identity key: the lowercased name.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// True if both cards share a name, ignoring case.
    #[must_use]
    pub fn same_name(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// Oracle text lowercased for phrase matching.
    #[must_use]
    pub fn lowered_text(&self) -> String {
        self.oracle_text.to_lowercase()
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.type_line.is_land()
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.type_line.is_creature()
    }

    /// Instants and cards with flash.
    #[must_use]
    pub fn is_instant_speed(&self) -> bool {
        self.type_line.is("Instant") || self.lowered_text().contains("flash")
    }

    #[must_use]
    pub fn is_colorless(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Catalog JSON shape of a card.
///
/// Required fields are optional here so that their absence becomes a
/// `DeckError::MalformedCard` instead of a generic decode failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    pub oracle_id: String,
    pub name: Option<String>,
    pub mana_cost: String,
    pub cmc: f64,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Vec<String>,
    pub rarity: Option<Rarity>,
    pub power: String,
    pub toughness: String,
    pub loyalty: String,
    pub keywords: Vec<String>,
}

impl TryFrom<CardRecord> for Card {
    type Error = DeckError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let name = record
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| DeckError::MalformedCard {
                name: record.oracle_id.clone(),
                field: "name",
            })?;
        let type_line = record
            .type_line
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DeckError::MalformedCard {
                name: name.clone(),
                field: "type_line",
            })?;
        let oracle_text = record.oracle_text.ok_or_else(|| DeckError::MalformedCard {
            name: name.clone(),
            field: "oracle_text",
        })?;
        let colors = ColorSet::try_from(record.colors)?;

        Ok(Card {
            id: record.oracle_id,
            name,
            mana_cost: record.mana_cost,
            cmc: record.cmc,
            type_line: TypeLine::parse(&type_line),
            oracle_text,
            colors,
            rarity: record.rarity.unwrap_or_default(),
            power: record.power,
            toughness: record.toughness,
            loyalty: record.loyalty,
            keywords: record.keywords,
        })
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        CardRecord {
            oracle_id: card.id,
            name: Some(card.name),
            mana_cost: card.mana_cost,
            cmc: card.cmc,
            type_line: Some(card.type_line.into()),
            oracle_text: Some(card.oracle_text),
            colors: card.colors.into(),
            rarity: Some(card.rarity),
            power: card.power,
            toughness: card.toughness,
            loyalty: card.loyalty,
            keywords: card.keywords,
        }
    }
}
