//! Mana base construction.
//!
//! Non-basic lands are chosen first (good utility lands, then fixing lands
//! in the deck's colors) and the remaining slots are split across basics in
//! proportion to the colored symbols of the chosen spells.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{Card, SymbolCounts};
use crate::core::{BuilderConfig, Color, ColorSet};
use crate::eval::ScoredEntry;

use super::colors::ColorIdentity;
use super::lands::{LandProfile, LandRole};
use super::selector::Selection;

/// One copy of a non-basic land taken from the pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandPick {
    pub card: Card,
    pub score: f64,
    pub position: usize,
    pub role: LandRole,
}

/// Basic land counts indexed by `Color::priority`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCounts([u32; 5]);

impl BasicCounts {
    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.0[color.priority()]
    }

    pub fn set(&mut self, color: Color, count: u32) {
        self.0[color.priority()] = count;
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Colors with a non-zero count, in W U B R G order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, n)| *n > 0)
    }
}

/// Lands chosen for a deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManaBase {
    /// Non-basic land copies, utility first, then fixing.
    pub lands: Vec<LandPick>,
    pub basics: BasicCounts,
    /// Colors the deck casts spells in.
    pub deck_colors: ColorSet,
    /// Lands missing from the land target.
    pub shortfall: u32,
}

impl ManaBase {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lands.len() as u32 + self.basics.total()
    }
}

/// Builds the land portion of a deck.
#[derive(Clone, Debug)]
pub struct ManaBaseBuilder<'a> {
    config: &'a BuilderConfig,
    identity: &'a ColorIdentity,
}

impl<'a> ManaBaseBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a BuilderConfig, identity: &'a ColorIdentity) -> Self {
        Self { config, identity }
    }

    /// Choose lands for `selection` out of the scored pool.
    #[must_use]
    pub fn build(&self, scored: &[ScoredEntry], selection: &Selection) -> ManaBase {
        let target = self.config.land_target as usize;
        let deck_colors = selection
            .picks
            .iter()
            .fold(self.identity.main_set(), |acc, pick| acc.union(pick.card.colors));

        let mut lands: Vec<(&ScoredEntry, LandProfile)> = scored
            .iter()
            .filter_map(|s| LandProfile::of(s.card()).map(|p| (s, p)))
            .filter(|(_, p)| p.colors.intersects(deck_colors))
            .collect();
        lands.sort_by(|(a, _), (b, _)| {
            b.score
                .total_cmp(&a.score)
                .then(a.position.cmp(&b.position))
        });

        let mut picks: Vec<LandPick> = Vec::new();
        let utility = lands
            .iter()
            .filter(|(s, p)| p.is_utility() && s.score >= self.config.utility_land_floor);
        take_units(utility, &mut picks, target);

        let fixing = lands.iter().filter(|(s, p)| {
            p.is_fixing() && !picks.iter().any(|pick| pick.card.same_name(&s.card().name))
        });
        let fixing: Vec<_> = fixing.collect();
        take_units(fixing.into_iter(), &mut picks, target);

        if picks.len() > target {
            picks.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.position.cmp(&b.position)));
            picks.truncate(target);
        }

        let remaining = self.config.land_target.saturating_sub(picks.len() as u32);
        let basics = self.allocate_basics(remaining, selection, deck_colors);

        debug!(
            nonbasic = picks.len(),
            basics = basics.total(),
            colors = %deck_colors.codes(),
            "built mana base"
        );

        let mut mana_base = ManaBase {
            lands: picks,
            basics,
            deck_colors,
            shortfall: 0,
        };
        mana_base.shortfall = self.config.land_target.saturating_sub(mana_base.total());
        mana_base
    }

    /// Split `remaining` basics across deck colors by colored symbol count.
    ///
    /// Rounded shares that miss `remaining` are reconciled on the colors with
    /// the most symbols (W > U > B > R > G on ties). Without any colored
    /// symbols everything goes to the first main color.
    #[must_use]
    pub fn allocate_basics(&self, remaining: u32, selection: &Selection, deck_colors: ColorSet) -> BasicCounts {
        let mut symbols = SymbolCounts::new();
        for pick in &selection.picks {
            symbols.add_cost(&pick.card.mana_cost, 1);
        }

        let mut basics = BasicCounts::default();
        if remaining == 0 {
            return basics;
        }

        let total = symbols.total_in(deck_colors);
        if total == 0 {
            let fallback = self
                .identity
                .main
                .first()
                .copied()
                .or_else(|| deck_colors.iter().next())
                .unwrap_or(Color::White);
            warn!(%fallback, remaining, "no colored mana symbols, basics go to one color");
            basics.set(fallback, remaining);
            return basics;
        }

        for color in deck_colors.iter() {
            let share = f64::from(remaining) * f64::from(symbols.get(color)) / f64::from(total);
            basics.set(color, share.round() as u32);
        }

        reconcile(&mut basics, remaining, &symbols.ranked(deck_colors));
        basics
    }
}

/// Push copies of each land in order until `target` copies are held.
fn take_units<'s, I>(lands: I, picks: &mut Vec<LandPick>, target: usize)
where
    I: Iterator<Item = &'s (&'s ScoredEntry, LandProfile)>,
{
    for (entry, profile) in lands {
        for _ in 0..entry.count() {
            if picks.len() >= target {
                return;
            }
            picks.push(LandPick {
                card: entry.card().clone(),
                score: entry.score,
                position: entry.position,
                role: profile.role,
            });
        }
    }
}

/// Adjust rounded counts so they sum to `remaining`.
fn reconcile(basics: &mut BasicCounts, remaining: u32, ranked: &[Color]) {
    let Some(&top) = ranked.first() else {
        return;
    };

    let allocated = basics.total();
    if allocated < remaining {
        basics.set(top, basics.get(top) + (remaining - allocated));
        return;
    }

    let mut excess = allocated - remaining;
    for &color in ranked {
        if excess == 0 {
            break;
        }
        let take = excess.min(basics.get(color));
        basics.set(color, basics.get(color) - take);
        excess -= take;
    }
}
