//! Pool-relative keyword and creature-type frequencies.
//!
//! Both tallies count pool entries, not copies: a keyword (or subtype)
//! carried by an entry of three copies counts once.

use std::collections::{BTreeMap, BTreeSet};

use crate::cards::Pool;

/// How many pool entries use each keyword in their own rules text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordFrequency {
    counts: BTreeMap<String, u32>,
}

impl KeywordFrequency {
    /// Count every keyword a card lists that also appears in its oracle text.
    #[must_use]
    pub fn from_pool(pool: &Pool) -> Self {
        Self::tally(pool, |_| true)
    }

    /// Like `from_pool`, restricted to keywords in an external catalog
    /// (compared case-insensitively).
    #[must_use]
    pub fn from_pool_with_catalog<S: AsRef<str>>(pool: &Pool, catalog: &[S]) -> Self {
        let known: BTreeSet<String> = catalog.iter().map(|k| k.as_ref().to_lowercase()).collect();
        Self::tally(pool, |keyword| known.contains(&keyword.to_lowercase()))
    }

    fn tally(pool: &Pool, accept: impl Fn(&str) -> bool) -> Self {
        let mut counts = BTreeMap::new();
        for entry in pool {
            let text = entry.card.lowered_text();
            let mut seen = BTreeSet::new();
            for keyword in &entry.card.keywords {
                if accept(keyword)
                    && text.contains(&keyword.to_lowercase())
                    && seen.insert(keyword.as_str())
                {
                    *counts.entry(keyword.clone()).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> u32 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }

    /// Keywords and counts in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for KeywordFrequency {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// How many pool entries carry each creature subtype.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindredFrequency {
    counts: BTreeMap<String, u32>,
}

impl KindredFrequency {
    /// Count subtypes of creature and kindred cards.
    #[must_use]
    pub fn from_pool(pool: &Pool) -> Self {
        let mut counts = BTreeMap::new();
        for entry in pool {
            let line = &entry.card.type_line;
            if !line.has_creature_subtypes() {
                continue;
            }
            for subtype in line.subtypes() {
                *counts.entry(subtype.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, subtype: &str) -> u32 {
        self.counts.get(subtype).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for KindredFrequency {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
