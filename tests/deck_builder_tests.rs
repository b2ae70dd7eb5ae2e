//! End-to-end deck construction tests.

use sealed_builder::build::{ColorIdentifier, Relaxation};
use sealed_builder::cards::{parse_pool_list, Card, CardCatalog, Deck};
use sealed_builder::core::{BuilderConfig, Color, DeckError};
use sealed_builder::eval::CardScorer;
use sealed_builder::ratings::RatingIndex;
use sealed_builder::report::Composition;
use sealed_builder::synergy::{SynergyGraph, SynergyRuleSet};
use sealed_builder::DeckAssembler;

const CATALOG_JSON: &str = r#"[
    {"oracle_id": "a1", "name": "Goblin Raider", "mana_cost": "{1}{R}", "cmc": 2,
     "type_line": "Creature — Goblin Warrior", "oracle_text": "", "colors": ["R"], "rarity": "common"},
    {"oracle_id": "a2", "name": "Shock", "mana_cost": "{R}", "cmc": 1,
     "type_line": "Instant", "oracle_text": "Shock deals 2 damage to any target.", "colors": ["R"], "rarity": "common"},
    {"oracle_id": "a3", "name": "Llanowar Elves", "mana_cost": "{G}", "cmc": 1,
     "type_line": "Creature — Elf Druid", "oracle_text": "{T}: Add {G}.", "colors": ["G"], "rarity": "common"},
    {"oracle_id": "a4", "name": "Rumbling Baloth", "mana_cost": "{2}{G}{G}", "cmc": 4,
     "type_line": "Creature — Beast", "oracle_text": "", "colors": ["G"], "rarity": "common"},
    {"oracle_id": "a5", "name": "Evolving Wilds", "mana_cost": "", "cmc": 0, "type_line": "Land",
     "oracle_text": "{T}, Sacrifice Evolving Wilds: Search your library for a basic land card, put it onto the battlefield tapped, then shuffle.",
     "colors": [], "rarity": "common"}
]"#;

const POOL_LIST: &str = "
4 Goblin Raider
3 Shock
2 llanowar elves
2 Rumbling Baloth
1 Evolving Wilds
1 Missing Card
";

const RATINGS_JS: &str =
    r#"var ratings = [{"name":"Goblin_Raider","myrating":"2.5"},{"name":"Rumbling Baloth","myrating":3.0}];"#;

fn creature(name: &str, cost: &str, cmc: f64, colors: &str) -> Card {
    Card::new(name, "Creature — Soldier")
        .with_mana_cost(cost, cmc)
        .with_color_codes(colors)
        .unwrap()
}

/// Two-color pool with enough playables on every curve slot.
fn two_color_pool() -> Deck {
    let mut pool = Deck::new();
    for i in 0..14 {
        let cmc = f64::from(1 + i % 6);
        pool.add_one(creature(&format!("Red {i}"), "{R}", cmc, "R"));
        pool.add_one(creature(&format!("Green {i}"), "{G}", cmc, "G"));
    }
    pool
}

// =============================================================================
// Ingestion To Deck
// =============================================================================

#[test]
fn test_pipeline_from_catalog_to_deck() {
    let catalog = CardCatalog::from_json(CATALOG_JSON).unwrap();
    let listing = parse_pool_list(POOL_LIST, &catalog).unwrap();
    let ratings = RatingIndex::from_draftsim_js(RATINGS_JS).unwrap();
    let config = BuilderConfig::default();

    assert_eq!(listing.unresolved, vec![("Missing Card".to_string(), 1)]);
    assert_eq!(listing.pool.total_cards(), 12);

    let build = DeckAssembler::new(&config, &ratings).build(&listing.pool);
    assert_eq!(build.identity.main, vec![Color::Red, Color::Green]);

    // the third Shock misses the one-drop slots and cannot come back uncapped
    assert_eq!(build.deck.count_of("Shock"), 2);
    assert_eq!(build.deck.count_of("Llanowar Elves"), 2);
    assert_eq!(build.deck.count_of("Goblin Raider"), 4);
    assert_eq!(build.deck.count_of("Rumbling Baloth"), 2);
    assert!(build.others.iter().any(|o| o.name == "Shock" && o.amount == 1));

    // 6 red and 6 green symbols split the 16 basics evenly
    assert_eq!(build.deck.count_of("Evolving Wilds"), 1);
    assert_eq!(build.deck.count_of("Mountain"), 8);
    assert_eq!(build.deck.count_of("Forest"), 8);

    assert_eq!(build.spell_shortfall, 13);
    assert_eq!(build.total_cards(), 27);

    let tail: Vec<_> = build.deck.iter().rev().take(3).map(|e| e.card.name.as_str()).collect();
    assert_eq!(tail, vec!["Forest", "Mountain", "Evolving Wilds"]);
}

#[test]
fn test_example_two_card_pool() {
    let pool = Deck::from_counts([
        (creature("Red Guy", "{2}{R}", 3.0, "R"), 1),
        (creature("Green Guy", "{1}{G}", 2.0, "G"), 1),
    ])
    .unwrap();
    let ratings: RatingIndex = [("Red Guy", 3.8), ("Green Guy", 1.8)].into_iter().collect();
    let config = BuilderConfig::default();

    let scored = CardScorer::for_pool(&pool, &ratings).score_pool(&pool);
    assert!((scored[0].score - 4.0).abs() < 1e-9);
    assert!((scored[1].score - 2.0).abs() < 1e-9);

    let identity = ColorIdentifier::new(&config).identify(&scored);
    assert_eq!(identity.main, vec![Color::Red, Color::Green]);
    assert!(identity.splashable.is_empty());
}

// =============================================================================
// Full Builds
// =============================================================================

#[test]
fn test_full_pool_builds_forty() {
    let pool = two_color_pool();
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert_eq!(build.total_cards(), 40);
    assert!(build.is_complete());
    assert_eq!(build.selection.len(), 23);

    let composition = Composition::of(&build.deck);
    assert_eq!(composition.lands, 2);
    assert_eq!(build.deck.count_of("Mountain") + build.deck.count_of("Forest"), 17);
}

#[test]
fn test_splash_bomb_brings_its_basic() {
    let mut pool = two_color_pool();
    pool.add_one(creature("Black Bomb", "{3}{B}", 4.0, "B"));
    pool.add_one(creature("Black Filler", "{2}{B}", 3.0, "B"));
    pool.add(Card::basic_land(Color::Black), 3).unwrap();
    let ratings: RatingIndex = [("Black Bomb", 4.3)].into_iter().collect();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert_eq!(build.identity.main, vec![Color::Red, Color::Green]);
    assert!(build.identity.splashable.contains(Color::Black));
    assert_eq!(build.deck.count_of("Black Bomb"), 1);
    assert_eq!(build.deck.count_of("Black Filler"), 0);
    assert!(build.deck.count_of("Swamp") >= 1);
    assert_eq!(build.total_cards(), 40);
}

#[test]
fn test_without_splash_sources_bomb_stays_out() {
    let mut pool = two_color_pool();
    pool.add_one(creature("Black Bomb", "{3}{B}", 4.0, "B"));
    let ratings: RatingIndex = [("Black Bomb", 4.3)].into_iter().collect();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert_eq!(build.deck.count_of("Black Bomb"), 0);
    assert_eq!(build.deck.count_of("Swamp"), 0);
}

#[test]
fn test_colorless_pool_uses_default_basics() {
    let mut pool = Deck::new();
    for i in 0..25 {
        pool.add_one(
            Card::new(format!("Construct {i}"), "Artifact Creature — Construct")
                .with_mana_cost("{3}", 3.0),
        );
    }
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert!(build.identity.main.is_empty());
    assert_eq!(build.deck.count_of("Plains"), 17);
    assert_eq!(build.total_cards(), 40);
}

#[test]
fn test_hybrid_only_costs_fall_back_to_main_color() {
    let mut pool = Deck::new();
    for i in 0..23 {
        pool.add_one(
            Card::new(format!("Hybrid {i}"), "Creature — Elf")
                .with_mana_cost("{G/U}", 1.0)
                .with_colors(Color::Green),
        );
    }
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert_eq!(build.identity.main, vec![Color::Green]);
    assert_eq!(build.deck.count_of("Forest"), 17);
    assert_eq!(build.mana_base.basics.total(), 17);
}

#[test]
fn test_uncapped_stage_fills_after_curve() {
    let mut pool = Deck::new();
    for i in 0..30 {
        pool.add_one(creature(&format!("Two Drop {i}"), "{1}{W}", 2.0, "W"));
    }
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    let capped = build.selection.curve_for_stage(Relaxation::CurveCapped);
    assert_eq!(capped.get(&2), Some(&5));
    assert_eq!(build.selection.len(), 23);
    assert_eq!(build.total_cards(), 40);
}

#[test]
fn test_custom_config_changes_targets() {
    let config = BuilderConfig::from_json(r#"{"deck_size": 60, "spell_target": 36, "land_target": 24}"#).unwrap();
    let mut pool = Deck::new();
    for i in 0..60 {
        pool.add_one(creature(&format!("Soldier {i}"), "{W}", f64::from(1 + i % 6), "W"));
    }
    let ratings = RatingIndex::new();

    let build = DeckAssembler::new(&config, &ratings).build(&pool);
    assert_eq!(build.total_cards(), 60);
    assert_eq!(build.deck.count_of("Plains"), 24);
}

#[test]
fn test_keyword_catalog_limits_bonus() {
    let drake = Card::new("Wind Drake", "Creature — Drake")
        .with_mana_cost("{2}{U}", 3.0)
        .with_oracle_text("Flying")
        .with_colors(Color::Blue)
        .with_keywords(["Flying"]);
    let crow = Card::new("Storm Crow", "Creature — Bird")
        .with_mana_cost("{1}{U}", 2.0)
        .with_oracle_text("Flying")
        .with_colors(Color::Blue)
        .with_keywords(["Flying"]);
    let pool = Deck::from_counts([(drake, 1), (crow, 1)]).unwrap();
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();

    let open = DeckAssembler::new(&config, &ratings).build(&pool);
    let score = |build: &sealed_builder::DeckBuild| {
        build.breakdown.iter().find(|b| b.name == "Wind Drake").map(|b| b.score).unwrap()
    };
    assert!((score(&open) - 1.5).abs() < 1e-9);

    let catalog = vec!["Trample".to_string()];
    let limited = DeckAssembler::new(&config, &ratings)
        .with_keyword_catalog(&catalog)
        .build(&pool);
    assert!((score(&limited) - 1.2).abs() < 1e-9);
}

#[test]
fn test_synergy_score_attached() {
    let mut pool = two_color_pool();
    pool.add_one(
        Card::new("Mill Beast", "Creature — Beast")
            .with_mana_cost("{2}{G}", 3.0)
            .with_colors(Color::Green)
            .with_oracle_text("When this creature enters, mill three cards."),
    );
    pool.add_one(
        Card::new("Grave Hound", "Creature — Dog")
            .with_mana_cost("{1}{R}", 2.0)
            .with_colors(Color::Red)
            .with_oracle_text("Return target creature card from your graveyard to your hand."),
    );
    let ratings: RatingIndex = [("Mill Beast", 3.0), ("Grave Hound", 3.0)].into_iter().collect();
    let rules = SynergyRuleSet::standard();
    let config = BuilderConfig::default();

    let build = DeckAssembler::new(&config, &ratings)
        .with_synergy(SynergyGraph::new(&rules))
        .build(&pool);
    assert_eq!(build.deck.count_of("Mill Beast"), 1);
    assert_eq!(build.deck.count_of("Grave Hound"), 1);
    let synergy = build.synergy.unwrap();
    assert!(synergy >= 0.25);
}

#[test]
fn test_builds_are_deterministic() {
    let pool = two_color_pool();
    let ratings = RatingIndex::new();
    let config = BuilderConfig::default();
    let assembler = DeckAssembler::new(&config, &ratings);

    let first = assembler.build(&pool);
    let second = assembler.build(&pool);
    assert_eq!(first, second);
}

// =============================================================================
// Contract Violations
// =============================================================================

#[test]
fn test_malformed_inputs_fail_fast() {
    let catalog = CardCatalog::from_json(CATALOG_JSON).unwrap();

    let err = parse_pool_list("x Shock", &catalog).unwrap_err();
    assert!(matches!(err, DeckError::MalformedCount { line: 1, .. }));

    let err = parse_pool_list("\n0 Shock", &catalog).unwrap_err();
    assert!(matches!(err, DeckError::InvalidCount { count: 0, .. }));

    let err = parse_pool_list("Shock", &catalog).unwrap_err();
    assert!(matches!(err, DeckError::MalformedPoolLine { line: 1, .. }));

    let err = CardCatalog::from_json(r#"[{"name": "Blank", "type_line": "Instant"}]"#).unwrap_err();
    assert!(err.to_string().contains("oracle_text"));

    let err = Card::basic_land_for_code("P").unwrap_err();
    assert!(matches!(err, DeckError::UnknownColor(ref code) if code == "P"));

    let err = Deck::from_counts([(Card::new("Shock", "Instant"), -1)]).unwrap_err();
    assert!(matches!(err, DeckError::InvalidCount { count: -1, .. }));
}
