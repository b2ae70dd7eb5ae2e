//! Popularity ratings.
//!
//! A `RatingIndex` maps card names to a numeric rating. Names missing from
//! the index rate a neutral 1.0. Ratings are loaded once per run and only
//! looked up afterwards.
//!
//! Draftsim publishes ratings as a script assigning a JSON array:
//!
//! ```text
//! var ratings = [{"name":"Lightning_Bolt","myrating":"3.5"}, ...];
//! ```
//!
//! `RatingIndex::from_draftsim_js` reads that payload.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer};

use crate::core::DeckError;

/// Rating for any name the index does not know.
pub const NEUTRAL_RATING: f64 = 1.0;

/// Case-insensitive name → rating lookup.
#[derive(Clone, Debug, Default)]
pub struct RatingIndex {
    ratings: FxHashMap<String, f64>,
}

impl RatingIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rating for a name, replacing any earlier one.
    pub fn insert(&mut self, name: &str, rating: f64) {
        self.ratings.insert(normalize(name), rating);
    }

    /// Rating for a name, or `NEUTRAL_RATING` when absent.
    #[must_use]
    pub fn rating(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(NEUTRAL_RATING)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.ratings.get(&normalize(name)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Parse a Draftsim ratings script.
    ///
    /// Entries keep only `name` and `myrating`; underscores in names become
    /// spaces. Ratings may be numbers or numeric strings.
    pub fn from_draftsim_js(js: &str) -> Result<Self, DeckError> {
        let start = js.find('[');
        let end = js.rfind(']');
        let array = match (start, end) {
            (Some(start), Some(end)) if start < end => &js[start..=end],
            _ => {
                let preview: String = js.chars().take(40).collect();
                return Err(DeckError::RatingsPayload(preview));
            }
        };

        let entries: Vec<DraftsimRating> = serde_json::from_str(array)?;
        Ok(entries
            .into_iter()
            .map(|entry| (entry.name, entry.myrating))
            .collect())
    }
}

fn normalize(name: &str) -> String {
    name.trim().replace('_', " ").to_lowercase()
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for RatingIndex {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (name, rating) in iter {
            index.insert(name.as_ref(), rating);
        }
        index
    }
}

#[derive(Debug, Deserialize)]
struct DraftsimRating {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "number_or_string")]
    myrating: f64,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
