//! Card predicates.
//!
//! Predicates decide whether a synergy rule applies to a card. Text checks
//! are case-insensitive substring tests on the oracle text; type checks go
//! through the card's parsed `TypeLine`. Predicates compose with `All`,
//! `Any` and `Not`, and a rule can call into named Rust functions through
//! `Custom`.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A boolean test over one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardPredicate {
    // === Text ===

    /// Oracle text contains the phrase.
    OracleContains(String),

    /// Oracle text does not contain the phrase.
    OracleExcludes(String),

    /// Every word of the phrase is a type, supertype or subtype of the card.
    TypeLine(String),

    // === Mana value ===

    CmcAtLeast(f64),
    CmcAtMost(f64),
    CmcEquals(f64),

    /// Mana value is an even integer.
    CmcEven,

    // === Combinators ===

    All(Vec<CardPredicate>),
    Any(Vec<CardPredicate>),
    Not(Box<CardPredicate>),

    // === Special ===

    Always,
    Never,

    /// Named function registered in `CustomPredicates`.
    Custom(String),
}

impl CardPredicate {
    pub fn oracle(phrase: impl Into<String>) -> Self {
        Self::OracleContains(phrase.into())
    }

    pub fn excludes(phrase: impl Into<String>) -> Self {
        Self::OracleExcludes(phrase.into())
    }

    pub fn type_line(phrase: impl Into<String>) -> Self {
        Self::TypeLine(phrase.into())
    }

    /// Oracle text contains any of `phrases`.
    pub fn oracle_any<'p>(phrases: impl IntoIterator<Item = &'p str>) -> Self {
        Self::Any(phrases.into_iter().map(Self::oracle).collect())
    }

    /// Create an AND predicate.
    pub fn all(predicates: impl IntoIterator<Item = CardPredicate>) -> Self {
        Self::All(predicates.into_iter().collect())
    }

    /// Create an OR predicate.
    pub fn any(predicates: impl IntoIterator<Item = CardPredicate>) -> Self {
        Self::Any(predicates.into_iter().collect())
    }

    /// Negate this predicate.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another predicate with AND.
    #[must_use]
    pub fn and(self, other: CardPredicate) -> Self {
        match self {
            Self::All(mut predicates) => {
                predicates.push(other);
                Self::All(predicates)
            }
            Self::Always => other,
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another predicate with OR.
    #[must_use]
    pub fn or(self, other: CardPredicate) -> Self {
        match self {
            Self::Any(mut predicates) => {
                predicates.push(other);
                Self::Any(predicates)
            }
            _ => Self::Any(vec![self, other]),
        }
    }

    /// Names of every `Custom` predicate in this tree.
    #[must_use]
    pub fn custom_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_custom(&mut names);
        names
    }

    fn collect_custom<'s>(&'s self, names: &mut Vec<&'s str>) {
        match self {
            Self::Custom(name) => names.push(name.as_str()),
            Self::All(inner) | Self::Any(inner) => {
                for p in inner {
                    p.collect_custom(names);
                }
            }
            Self::Not(inner) => inner.collect_custom(names),
            _ => {}
        }
    }

    /// Check the predicate against a card.
    #[must_use]
    pub fn matches(&self, ctx: &PredicateContext<'_>) -> bool {
        match self {
            Self::OracleContains(phrase) => ctx.text.contains(&phrase.to_lowercase()),
            Self::OracleExcludes(phrase) => !ctx.text.contains(&phrase.to_lowercase()),
            Self::TypeLine(phrase) => ctx.card.type_line.mentions(phrase),

            Self::CmcAtLeast(min) => ctx.card.cmc >= *min,
            Self::CmcAtMost(max) => ctx.card.cmc <= *max,
            Self::CmcEquals(value) => ctx.card.cmc == *value,
            Self::CmcEven => ctx.card.cmc.fract() == 0.0 && ctx.card.cmc % 2.0 == 0.0,

            Self::All(inner) => inner.iter().all(|p| p.matches(ctx)),
            Self::Any(inner) => inner.iter().any(|p| p.matches(ctx)),
            Self::Not(inner) => !inner.matches(ctx),

            Self::Always => true,
            Self::Never => false,

            Self::Custom(name) => ctx.custom.is_some_and(|c| c.evaluate(name, ctx.card)),
        }
    }
}

/// A card with its lowercased text, prepared once for many predicates.
pub struct PredicateContext<'a> {
    pub card: &'a Card,
    pub text: String,
    pub custom: Option<&'a CustomPredicates>,
}

impl<'a> PredicateContext<'a> {
    #[must_use]
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            text: card.lowered_text(),
            custom: None,
        }
    }

    #[must_use]
    pub fn with_custom(mut self, custom: &'a CustomPredicates) -> Self {
        self.custom = Some(custom);
        self
    }
}

type PredicateFn = Arc<dyn Fn(&Card) -> bool + Send + Sync>;

/// Registry of named predicate functions.
#[derive(Clone, Default)]
pub struct CustomPredicates {
    functions: FxHashMap<String, PredicateFn>,
}

impl CustomPredicates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any previous function.
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Card) -> bool + Send + Sync + 'static,
    {
        self.register(name, f);
        self
    }

    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&Card) -> bool + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(f));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Run a named function; unknown names never match.
    #[must_use]
    pub fn evaluate(&self, name: &str, card: &Card) -> bool {
        self.functions.get(name).is_some_and(|f| f(card))
    }
}

impl fmt::Debug for CustomPredicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.functions.keys().collect();
        names.sort();
        f.debug_struct("CustomPredicates").field("names", &names).finish()
    }
}
