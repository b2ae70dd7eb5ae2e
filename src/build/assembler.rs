//! Deck assembly.
//!
//! `DeckAssembler` runs the whole pipeline over one pool: score, identify
//! colors, select spells, build the mana base, then emit a deck of
//! `deck_size` cards (fewer only when the pool runs out of playables).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, Deck, Pool};
use crate::core::{BuilderConfig, Color};
use crate::eval::{CardScorer, KeywordFrequency, KindredFrequency};
use crate::ratings::RatingIndex;
use crate::report::{self, CardScore};
use crate::synergy::SynergyGraph;

use super::colors::{ColorIdentifier, ColorIdentity};
use super::mana_base::{ManaBase, ManaBaseBuilder};
use super::selector::{CurveConstrainedSelector, Pick, Selection};

/// Everything produced by one build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckBuild {
    pub deck: Deck,
    pub identity: ColorIdentity,
    pub selection: Selection,
    pub mana_base: ManaBase,
    /// Nonland slots left empty.
    pub spell_shortfall: u32,
    /// Land slots left empty.
    pub land_shortfall: u32,
    /// Score of every deck entry.
    pub breakdown: Vec<CardScore>,
    /// Pool cards left out of the deck.
    pub others: Vec<CardScore>,
    /// Deck-wide synergy, when a rule table was supplied.
    pub synergy: Option<f64>,
}

impl DeckBuild {
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.deck.total_cards()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.spell_shortfall == 0 && self.land_shortfall == 0
    }
}

/// Builds a deck from a pool.
#[derive(Clone, Debug)]
pub struct DeckAssembler<'a> {
    config: &'a BuilderConfig,
    ratings: &'a RatingIndex,
    keyword_catalog: Option<&'a [String]>,
    synergy: Option<SynergyGraph<'a>>,
}

impl<'a> DeckAssembler<'a> {
    #[must_use]
    pub fn new(config: &'a BuilderConfig, ratings: &'a RatingIndex) -> Self {
        Self {
            config,
            ratings,
            keyword_catalog: None,
            synergy: None,
        }
    }

    /// Only count keywords from this catalog toward keyword bonuses.
    #[must_use]
    pub fn with_keyword_catalog(mut self, catalog: &'a [String]) -> Self {
        self.keyword_catalog = Some(catalog);
        self
    }

    /// Score the finished deck's synergy.
    #[must_use]
    pub fn with_synergy(mut self, graph: SynergyGraph<'a>) -> Self {
        self.synergy = Some(graph);
        self
    }

    /// Scorer for `pool`, honoring the keyword catalog if set.
    #[must_use]
    pub fn scorer(&self, pool: &Pool) -> CardScorer<'a> {
        let keywords = match self.keyword_catalog {
            Some(catalog) => KeywordFrequency::from_pool_with_catalog(pool, catalog),
            None => KeywordFrequency::from_pool(pool),
        };
        CardScorer::with_frequencies(self.ratings, keywords, KindredFrequency::from_pool(pool))
    }

    #[must_use]
    pub fn build(&self, pool: &Pool) -> DeckBuild {
        let scorer = self.scorer(pool);
        let scored = scorer.score_pool(pool);

        let identity = ColorIdentifier::new(self.config).identify(&scored);
        let selection = CurveConstrainedSelector::new(self.config, &identity).select(&scored);
        let mana_base = ManaBaseBuilder::new(self.config, &identity).build(&scored, &selection);

        let nonland_slots = self.config.deck_size.saturating_sub(mana_base.total()) as usize;
        let mut spells: Vec<&Pick> = selection.picks.iter().collect();
        spells.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.position.cmp(&b.position)));
        spells.truncate(nonland_slots);

        let deck = emit_deck(&spells, &mana_base);
        let spell_shortfall = (nonland_slots - spells.len()) as u32;
        let synergy = self.synergy.map(|graph| graph.deck_score(&deck));

        info!(
            main = ?identity.main,
            spells = spells.len(),
            nonbasic_lands = mana_base.lands.len(),
            basics = mana_base.basics.total(),
            total = deck.total_cards(),
            "assembled deck"
        );

        DeckBuild {
            breakdown: report::breakdown(&deck, &scorer),
            others: report::other_playables(&scored, &deck),
            land_shortfall: mana_base.shortfall,
            deck,
            identity,
            selection,
            mana_base,
            spell_shortfall,
            synergy,
        }
    }
}

/// Spells grouped by name in score order, then non-basic lands, then basics
/// in W U B R G order.
fn emit_deck(spells: &[&Pick], mana_base: &ManaBase) -> Deck {
    let mut deck = Deck::new();
    for pick in spells {
        deck.add_one(pick.card.clone());
    }
    for land in &mana_base.lands {
        deck.add_one(land.card.clone());
    }
    for (color, count) in mana_base.basics.iter() {
        add_basics(&mut deck, color, count);
    }
    deck
}

fn add_basics(deck: &mut Deck, color: Color, count: u32) {
    let basic = Card::basic_land(color);
    for _ in 0..count {
        deck.add_one(basic.clone());
    }
}
