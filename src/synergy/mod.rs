//! Synergy tagging and scoring.
//!
//! - `predicate`: Composable card predicates and named custom functions
//! - `rules`: Rule table, JSON configuration and the standard taxonomy
//! - `graph`: Pair, deck and link scores over a rule table

pub mod graph;
pub mod predicate;
pub mod rules;

pub use graph::{SynergyGraph, SynergyLink};
pub use predicate::{CardPredicate, CustomPredicates, PredicateContext};
pub use rules::{RuleDefinition, SynergyConfig, SynergyDefinition, SynergyRule, SynergyRuleSet};
