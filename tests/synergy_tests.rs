//! Synergy classification and scoring tests.

use std::collections::BTreeSet;

use sealed_builder::cards::{Card, Deck};
use sealed_builder::synergy::{CardPredicate, CustomPredicates, SynergyGraph, SynergyRule, SynergyRuleSet};

fn self_mill() -> Card {
    Card::new("Mill Adept", "Creature — Human Wizard")
        .with_mana_cost("{1}{U}", 2.0)
        .with_oracle_text("When this creature enters, mill two cards.")
}

fn graveyard_payoff() -> Card {
    Card::new("Grave Scrabbler", "Creature — Zombie")
        .with_mana_cost("{1}{B}", 2.0)
        .with_oracle_text("When this creature enters, return target creature card from your graveyard to your hand.")
}

fn vanilla(name: &str) -> Card {
    Card::new(name, "Creature — Bear").with_mana_cost("{1}{G}", 2.0)
}

// =============================================================================
// Pair Scores
// =============================================================================

#[test]
fn test_pair_score_example() {
    let rules = SynergyRuleSet::standard();
    let graph = SynergyGraph::new(&rules);

    let score = graph.pair_score(&self_mill(), 2, &graveyard_payoff(), 1);
    assert!((score - 0.5).abs() < 1e-9);
}

#[test]
fn test_density_weight_for_prevalent_tag() {
    let rules = SynergyRuleSet::standard();
    let graph = SynergyGraph::new(&rules);

    // SelfMill occurs twice: no density bonus
    let sparse = Deck::from_counts([(self_mill(), 2), (graveyard_payoff(), 1)]).unwrap();
    assert!((graph.deck_score(&sparse) - 0.5).abs() < 1e-9);

    // another SelfMill card without a pairing partner pushes the tag to 4 copies;
    // the target pair scores 0.5 * 1.25, the new card pairs with the payoff too
    let extra = Card::new("Mill Extra", "Sorcery")
        .with_mana_cost("{3}{U}", 4.0)
        .with_oracle_text("Target player mills four cards.");
    let dense = Deck::from_counts([(self_mill(), 2), (graveyard_payoff(), 1), (extra, 2)]).unwrap();

    let pair = 0.5 * 1.25;
    let extra_pair = 0.25 * 2.0 * 1.0 * 1.25;
    assert!((graph.deck_score(&dense) - (pair + extra_pair)).abs() < 1e-9);
}

#[test]
fn test_unrelated_cards_score_zero() {
    let rules = SynergyRuleSet::standard();
    let graph = SynergyGraph::new(&rules);
    let deck = Deck::from_counts([(vanilla("Bear A"), 3), (vanilla("Bear B"), 2)]).unwrap();
    assert_eq!(graph.deck_score(&deck), 0.0);
    assert!(graph.links(&deck).is_empty());
}

// =============================================================================
// Deck Penalties
// =============================================================================

#[test]
fn test_aura_penalty() {
    let rules = SynergyRuleSet::standard();
    let graph = SynergyGraph::new(&rules);
    let aura = Card::new("Feral Invocation", "Enchantment — Aura")
        .with_mana_cost("{2}{G}", 3.0)
        .with_oracle_text("Flash\nEnchant creature\nEnchanted creature gets +2/+2.");

    let mut few = Deck::new();
    few.add_one(aura.clone());
    for i in 0..4 {
        few.add_one(vanilla(&format!("Bear {i}")));
    }
    assert!((graph.deck_score(&few) + 1.0).abs() < 1e-9);

    let mut many = few.clone();
    many.add_one(vanilla("Bear 4"));
    assert_eq!(graph.deck_score(&many), 0.0);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_classification_is_stable() {
    let rules = SynergyRuleSet::standard();
    let card = Card::new("Pack Leader", "Creature — Wolf")
        .with_mana_cost("{2}{G}", 3.0)
        .with_oracle_text("When Pack Leader enters, create a 2/2 green Wolf creature token. Sacrifice another creature: Draw a card.");

    let first = rules.classify(&card);
    for _ in 0..5 {
        assert_eq!(rules.classify(&card), first);
    }
    let expected: BTreeSet<String> = ["SacrificeOutlet", "TokenProducer"].iter().map(|s| s.to_string()).collect();
    assert_eq!(first, expected);
}

#[test]
fn test_json_rules_drive_the_graph() {
    let json = r#"{
        "synergies": [
            {"tag": "Artifacts", "matches": ["ArtifactPayoff"]},
            {"tag": "ArtifactPayoff", "matches": ["Artifacts"]}
        ],
        "rules": [
            {"tag": "Artifacts", "type_line_keywords": ["Artifact"]},
            {"tag": "ArtifactPayoff", "oracle_keywords": ["artifact you control"], "cmc_max": 3},
            {"tag": "Combo", "predicate": {"Custom": "combo"}}
        ]
    }"#;
    let custom = CustomPredicates::new().with("combo", |card: &Card| {
        card.lowered_text().contains("combo") && card.cmc % 2.0 == 0.0
    });
    let rules = SynergyRuleSet::from_json(json, custom).unwrap();
    let graph = SynergyGraph::new(&rules);

    let trinket = Card::new("Trinket", "Artifact").with_mana_cost("{1}", 1.0);
    let smith = Card::new("Smith", "Creature — Dwarf")
        .with_mana_cost("{1}{R}", 2.0)
        .with_oracle_text("Whenever an artifact you control enters, Smith deals 1 damage to any target.");
    let combo = Card::new("Combo Piece", "Creature — Construct")
        .with_mana_cost("{4}", 4.0)
        .with_oracle_text("Combo: untap target permanent.");

    assert!(rules.classify(&combo).contains("Combo"));
    assert!((graph.pair_score(&trinket, 2, &smith, 1) - 0.5).abs() < 1e-9);

    let deck = Deck::from_counts([(trinket, 1), (smith, 1)]).unwrap();
    let links = graph.links(&deck);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from, "Trinket");
}

#[test]
fn test_rule_set_from_parts_with_predicates() {
    let rule = SynergyRule::new(
        "EvenDrop",
        CardPredicate::type_line("Creature").and(CardPredicate::CmcEven),
    );
    let rules = SynergyRuleSet::from_parts(
        [rule],
        [("EvenDrop".to_string(), BTreeSet::from(["EvenDrop".to_string()]))],
        CustomPredicates::new(),
    )
    .unwrap();
    let graph = SynergyGraph::new(&rules);

    let even = vanilla("Even");
    let odd = Card::new("Odd", "Creature — Bear").with_mana_cost("{2}{G}", 3.0);
    assert!((graph.pair_score(&even, 1, &even, 1) - 0.25).abs() < 1e-9);
    assert_eq!(graph.pair_score(&even, 1, &odd, 1), 0.0);
}
