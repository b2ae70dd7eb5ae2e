//! Synergy rules and tag affinities.
//!
//! A `SynergyRuleSet` is built once, from JSON or from the standard taxonomy,
//! and then shared by reference. Rules attach tags to cards; affinities say
//! which tags pay off which.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::DeckError;

use super::predicate::{CardPredicate, CustomPredicates, PredicateContext};

/// A tag plus the predicate that grants it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynergyRule {
    pub tag: String,
    pub predicate: CardPredicate,
}

impl SynergyRule {
    pub fn new(tag: impl Into<String>, predicate: CardPredicate) -> Self {
        Self {
            tag: tag.into(),
            predicate,
        }
    }
}

/// Tag affinity entry: `tag` pays off with any of `matches`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynergyDefinition {
    #[serde(alias = "Tag")]
    pub tag: String,
    #[serde(alias = "Matches")]
    pub matches: Vec<String>,
}

/// Declarative rule as written in configuration.
///
/// All listed conditions must hold. `minimum_cmc` is an older spelling of
/// `cmc_min`; both are honored. Keys are snake_case, with PascalCase and
/// camelCase accepted as aliases. Any other key is rejected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleDefinition {
    #[serde(alias = "Tag")]
    pub tag: String,
    #[serde(alias = "OracleKeywords", alias = "oracleKeywords")]
    pub oracle_keywords: Vec<String>,
    #[serde(alias = "TypeLineKeywords", alias = "typeLineKeywords")]
    pub type_line_keywords: Vec<String>,
    #[serde(alias = "OracleExclusions", alias = "oracleExclusions")]
    pub oracle_exclusions: Vec<String>,
    #[serde(alias = "MinimumCMC", alias = "minimumCMC", alias = "minimumCmc")]
    pub minimum_cmc: Option<f64>,
    #[serde(alias = "CmcMin", alias = "cmcMin")]
    pub cmc_min: Option<f64>,
    #[serde(alias = "CmcMax", alias = "cmcMax")]
    pub cmc_max: Option<f64>,
    #[serde(alias = "CmcEqual", alias = "cmcEqual")]
    pub cmc_equal: Option<f64>,
    #[serde(alias = "Predicate", skip_serializing_if = "Option::is_none")]
    pub predicate: Option<CardPredicate>,
}

impl RuleDefinition {
    /// Fold every field into a single predicate.
    #[must_use]
    pub fn to_predicate(&self) -> CardPredicate {
        let mut parts = Vec::new();
        parts.extend(self.oracle_keywords.iter().map(CardPredicate::oracle));
        parts.extend(self.oracle_exclusions.iter().map(CardPredicate::excludes));
        parts.extend(self.type_line_keywords.iter().map(CardPredicate::type_line));
        parts.extend(self.minimum_cmc.map(CardPredicate::CmcAtLeast));
        parts.extend(self.cmc_min.map(CardPredicate::CmcAtLeast));
        parts.extend(self.cmc_max.map(CardPredicate::CmcAtMost));
        parts.extend(self.cmc_equal.map(CardPredicate::CmcEquals));
        parts.extend(self.predicate.clone());
        CardPredicate::All(parts)
    }
}

/// Synergy configuration file contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynergyConfig {
    #[serde(alias = "Synergies")]
    pub synergies: Vec<SynergyDefinition>,
    #[serde(alias = "Rules")]
    pub rules: Vec<RuleDefinition>,
}

impl SynergyConfig {
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Immutable table of rules and affinities.
#[derive(Clone, Debug, Default)]
pub struct SynergyRuleSet {
    rules: Vec<SynergyRule>,
    affinities: BTreeMap<String, BTreeSet<String>>,
    custom: CustomPredicates,
}

impl SynergyRuleSet {
    /// Compile a configuration.
    ///
    /// A later rule or affinity for the same tag replaces the earlier one.
    /// Every `Custom` predicate must be registered in `custom`.
    pub fn from_config(config: &SynergyConfig, custom: CustomPredicates) -> Result<Self, DeckError> {
        let rules = config
            .rules
            .iter()
            .map(|def| SynergyRule::new(def.tag.clone(), def.to_predicate()));
        let affinities = config
            .synergies
            .iter()
            .map(|def| (def.tag.clone(), def.matches.iter().cloned().collect()));
        Self::from_parts(rules, affinities, custom)
    }

    /// Parse and compile a JSON configuration.
    pub fn from_json(json: &str, custom: CustomPredicates) -> Result<Self, DeckError> {
        Self::from_config(&SynergyConfig::from_json(json)?, custom)
    }

    pub fn from_parts<R, A>(rules: R, affinities: A, custom: CustomPredicates) -> Result<Self, DeckError>
    where
        R: IntoIterator<Item = SynergyRule>,
        A: IntoIterator<Item = (String, BTreeSet<String>)>,
    {
        let mut table: Vec<SynergyRule> = Vec::new();
        for rule in rules {
            if let Some(name) = rule.predicate.custom_names().into_iter().find(|n| !custom.contains(n)) {
                return Err(DeckError::UnknownPredicate {
                    tag: rule.tag.clone(),
                    name: name.to_string(),
                });
            }
            match table.iter_mut().find(|r| r.tag == rule.tag) {
                Some(existing) => *existing = rule,
                None => table.push(rule),
            }
        }

        Ok(Self {
            rules: table,
            affinities: affinities.into_iter().collect(),
            custom,
        })
    }

    /// Built-in tags and affinities.
    #[must_use]
    pub fn standard() -> Self {
        let affinities = STANDARD_AFFINITIES
            .iter()
            .flat_map(|(a, b)| [(*a, *b), (*b, *a)])
            .fold(BTreeMap::<String, BTreeSet<String>>::new(), |mut map, (from, to)| {
                map.entry(from.to_string()).or_default().insert(to.to_string());
                map
            });

        Self {
            rules: standard_rules(),
            affinities,
            custom: CustomPredicates::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[SynergyRule] {
        &self.rules
    }

    /// Tags that `tag` pays off with.
    #[must_use]
    pub fn affinity(&self, tag: &str) -> Option<&BTreeSet<String>> {
        self.affinities.get(tag)
    }

    /// True if `from` pays off with `to`.
    #[must_use]
    pub fn has_affinity(&self, from: &str, to: &str) -> bool {
        self.affinity(from).is_some_and(|m| m.contains(to))
    }

    /// Tags of a card. Independent of rule order and of any other card.
    #[must_use]
    pub fn classify(&self, card: &Card) -> BTreeSet<String> {
        let ctx = PredicateContext::new(card).with_custom(&self.custom);
        self.rules
            .iter()
            .filter(|rule| rule.predicate.matches(&ctx))
            .map(|rule| rule.tag.clone())
            .collect()
    }
}

const STANDARD_AFFINITIES: [(&str, &str); 8] = [
    ("SelfMill", "GraveyardPayoff"),
    ("TokenProducer", "TokenPayoff"),
    ("TokenProducer", "SacrificeOutlet"),
    ("CountersProducer", "CountersPayoff"),
    ("Lifegain", "LifegainPayoff"),
    ("CheapSpell", "Spellslinger"),
    ("Aura", "AuraPayoff"),
    ("Flyer", "FlyingPayoff"),
];

fn standard_rules() -> Vec<SynergyRule> {
    use CardPredicate as P;

    vec![
        SynergyRule::new("SelfMill", P::oracle_any(["mill", "surveil"])),
        SynergyRule::new(
            "GraveyardPayoff",
            P::oracle_any(["from your graveyard", "cards in your graveyard", "flashback", "escape"]),
        ),
        SynergyRule::new("TokenProducer", P::oracle("create").and(P::oracle("token"))),
        SynergyRule::new(
            "TokenPayoff",
            P::oracle_any([
                "creatures you control get",
                "for each creature you control",
                "whenever another creature you control enters",
            ]),
        ),
        SynergyRule::new(
            "SacrificeOutlet",
            P::oracle_any(["sacrifice a creature", "sacrifice another"]),
        ),
        SynergyRule::new(
            "CountersProducer",
            P::oracle_any(["put a +1/+1 counter", "with a +1/+1 counter on it", "+1/+1 counters on"]),
        ),
        SynergyRule::new(
            "CountersPayoff",
            P::oracle_any(["for each +1/+1 counter", "creature you control with a +1/+1 counter", "counter on it"])
                .and(P::excludes("put a +1/+1 counter")),
        ),
        SynergyRule::new(
            "Lifegain",
            P::oracle("lifelink").or(P::all([
                P::oracle("gain"),
                P::oracle("life"),
                P::excludes("whenever you gain life"),
            ])),
        ),
        SynergyRule::new("LifegainPayoff", P::oracle("whenever you gain life")),
        SynergyRule::new(
            "Spellslinger",
            P::oracle_any(["instant or sorcery spell", "noncreature spell"]),
        ),
        SynergyRule::new(
            "CheapSpell",
            P::any([P::type_line("Instant"), P::type_line("Sorcery")]).and(P::CmcAtMost(2.0)),
        ),
        SynergyRule::new("Aura", P::type_line("Aura")),
        SynergyRule::new(
            "AuraPayoff",
            P::oracle_any(["aura spell", "for each aura", "auras you control", "enchanted creature you control"]),
        ),
        SynergyRule::new("Flyer", P::type_line("Creature").and(P::oracle("flying"))),
        SynergyRule::new(
            "FlyingPayoff",
            P::oracle_any(["creatures you control with flying", "whenever a creature you control with flying"]),
        ),
    ]
}
