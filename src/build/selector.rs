//! Curve-constrained spell selection.
//!
//! Nonland cards are expanded into one candidate per copy and queued by
//! descending score (ties keep pool order). The queue is drained once per
//! relaxation stage:
//!
//! 1. `CurveCapped`: a copy is accepted only while its curve bucket is below
//!    target.
//! 2. `Uncapped`: bucket caps are lifted; copies of cards already accepted in
//!    an earlier stage are skipped.
//!
//! Draining stops as soon as the spell target is met. Ending short is not an
//! error; the shortfall is reported on the `Selection`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::Card;
use crate::core::BuilderConfig;
use crate::eval::ScoredEntry;

use super::colors::ColorIdentity;

/// How far the selection constraints are relaxed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relaxation {
    /// Per-bucket curve targets enforced.
    CurveCapped,
    /// Only the total spell target enforced.
    Uncapped,
}

impl Relaxation {
    /// Stages in the order they are tried.
    pub const ESCALATION: [Relaxation; 2] = [Relaxation::CurveCapped, Relaxation::Uncapped];
}

/// One accepted copy of a spell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub card: Card,
    pub score: f64,
    /// Pool position of the source entry.
    pub position: usize,
    pub bucket: u8,
    pub stage: Relaxation,
}

/// Outcome of spell selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Accepted copies in acceptance order.
    pub picks: Vec<Pick>,
    /// Accepted copies per curve bucket.
    pub curve: BTreeMap<u8, u32>,
    /// Copies missing from the spell target.
    pub shortfall: u32,
}

impl Selection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Copies accepted during `stage`, per bucket.
    #[must_use]
    pub fn curve_for_stage(&self, stage: Relaxation) -> BTreeMap<u8, u32> {
        let mut curve = BTreeMap::new();
        for pick in self.picks.iter().filter(|p| p.stage == stage) {
            *curve.entry(pick.bucket).or_insert(0) += 1;
        }
        curve
    }
}

/// A single copy waiting in the queue.
#[derive(Clone, Debug)]
struct Candidate<'s> {
    source: &'s ScoredEntry,
    bucket: u8,
}

/// Greedy spell picker bounded by a target curve.
#[derive(Clone, Debug)]
pub struct CurveConstrainedSelector<'a> {
    config: &'a BuilderConfig,
    identity: &'a ColorIdentity,
}

impl<'a> CurveConstrainedSelector<'a> {
    #[must_use]
    pub fn new(config: &'a BuilderConfig, identity: &'a ColorIdentity) -> Self {
        Self { config, identity }
    }

    /// True if a card may be played: on-color, or a splashable bomb.
    #[must_use]
    pub fn is_eligible(&self, entry: &ScoredEntry) -> bool {
        let colors = entry.card().colors;
        self.identity.is_on_color(colors)
            || (entry.score >= self.config.splash_score_floor && self.identity.can_splash(colors))
    }

    /// Pick spells from scored pool entries. Lands are ignored.
    #[must_use]
    pub fn select(&self, scored: &[ScoredEntry]) -> Selection {
        let queue = self.build_queue(scored);
        let target = self.config.spell_target as usize;
        let mut selection = Selection::default();
        let mut taken = vec![false; queue.len()];

        for stage in Relaxation::ESCALATION {
            if selection.picks.len() >= target {
                break;
            }
            let accepted = self.drain(&queue, stage, &mut taken, &mut selection);
            debug!(?stage, accepted, total = selection.picks.len(), "selection stage drained");
        }

        selection.shortfall = self.config.spell_target.saturating_sub(selection.picks.len() as u32);
        if selection.shortfall > 0 {
            warn!(
                selected = selection.picks.len(),
                shortfall = selection.shortfall,
                "not enough playable spells in pool"
            );
        }
        selection
    }

    fn build_queue<'s>(&self, scored: &'s [ScoredEntry]) -> Vec<Candidate<'s>> {
        let mut sources: Vec<&ScoredEntry> = scored.iter().filter(|s| !s.card().is_land()).collect();
        sources.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.position.cmp(&b.position))
        });

        sources
            .into_iter()
            .filter(|source| self.is_eligible(source))
            .flat_map(|source| {
                let bucket = BuilderConfig::bucket_for(source.card().cmc);
                (0..source.count()).map(move |_| Candidate { source, bucket })
            })
            .collect()
    }

    /// Drain the queue under one relaxation stage; returns copies accepted.
    fn drain(
        &self,
        queue: &[Candidate<'_>],
        stage: Relaxation,
        taken: &mut [bool],
        selection: &mut Selection,
    ) -> usize {
        let target = self.config.spell_target as usize;
        let earlier: BTreeSet<String> = selection.picks.iter().map(|p| p.card.key()).collect();
        let mut accepted = 0;

        for (index, candidate) in queue.iter().enumerate() {
            if selection.picks.len() >= target {
                break;
            }
            if taken[index] {
                continue;
            }

            let card = candidate.source.card();
            let admissible = match stage {
                Relaxation::CurveCapped => {
                    let in_bucket = selection.curve.get(&candidate.bucket).copied().unwrap_or(0);
                    in_bucket < self.config.bucket_target(candidate.bucket)
                }
                Relaxation::Uncapped => !earlier.contains(&card.key()),
            };
            if !admissible {
                continue;
            }

            taken[index] = true;
            *selection.curve.entry(candidate.bucket).or_insert(0) += 1;
            selection.picks.push(Pick {
                card: card.clone(),
                score: candidate.source.score,
                position: candidate.source.position,
                bucket: candidate.bucket,
                stage,
            });
            accepted += 1;
        }

        accepted
    }
}
