//! Card data: records, type lines, mana symbols, decks and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card record with a structured `TypeLine`
//! - `DeckEntry` / `Deck`: Name-unique ordered entries (a `Pool` is a `Deck`)
//! - `CardCatalog`: Case-insensitive name lookup
//! - `SymbolCounts`: Colored mana symbol tallies

pub mod card;
pub mod catalog;
pub mod deck;
pub mod mana_cost;
pub mod pool_list;
pub mod type_line;

pub use card::{Card, CardRecord, Rarity};
pub use catalog::CardCatalog;
pub use deck::{Deck, DeckEntry, Pool};
pub use mana_cost::{colored_symbols, produced_colors, SymbolCounts};
pub use pool_list::{parse_pool_list, PoolListing};
pub use type_line::TypeLine;
