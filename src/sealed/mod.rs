//! Sealed pool simulation.
//!
//! Each pack holds one rare slot (mythic one time in four when the set has
//! mythics), three uncommons and ten commons. Basic lands never appear in
//! the common slots. Generation is reproducible from the RNG seed; this is
//! the only randomized part of the crate.

use tracing::debug;

use crate::cards::{Card, CardCatalog, Pool, Rarity};
use crate::core::PoolRng;

pub const DEFAULT_PACK_COUNT: usize = 6;
pub const MYTHIC_CHANCE: f64 = 0.25;
pub const UNCOMMONS_PER_PACK: usize = 3;
pub const COMMONS_PER_PACK: usize = 10;

/// Draws packs from a set's cards.
#[derive(Clone, Debug)]
pub struct SealedGenerator<'a> {
    commons: Vec<&'a Card>,
    uncommons: Vec<&'a Card>,
    rares: Vec<&'a Card>,
    mythics: Vec<&'a Card>,
    pack_count: usize,
}

impl<'a> SealedGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self {
            commons: catalog
                .find_by_rarity(Rarity::Common)
                .filter(|c| !c.type_line.is_basic_land())
                .collect(),
            uncommons: catalog.find_by_rarity(Rarity::Uncommon).collect(),
            rares: catalog.find_by_rarity(Rarity::Rare).collect(),
            mythics: catalog.find_by_rarity(Rarity::Mythic).collect(),
            pack_count: DEFAULT_PACK_COUNT,
        }
    }

    #[must_use]
    pub fn with_pack_count(mut self, pack_count: usize) -> Self {
        self.pack_count = pack_count;
        self
    }

    #[must_use]
    pub fn pack_count(&self) -> usize {
        self.pack_count
    }

    /// One pack. Slots whose rarity is missing from the set stay empty.
    pub fn open_pack(&self, rng: &mut PoolRng) -> Vec<Card> {
        let mut pack = Vec::with_capacity(1 + UNCOMMONS_PER_PACK + COMMONS_PER_PACK);

        let rare = if !self.mythics.is_empty() && rng.gen_bool(MYTHIC_CHANCE) {
            rng.choose(&self.mythics)
        } else {
            rng.choose(&self.rares)
        };
        pack.extend(rare.map(|c| (*c).clone()));

        for _ in 0..UNCOMMONS_PER_PACK {
            pack.extend(rng.choose(&self.uncommons).map(|c| (*c).clone()));
        }
        for _ in 0..COMMONS_PER_PACK {
            pack.extend(rng.choose(&self.commons).map(|c| (*c).clone()));
        }
        pack
    }

    /// Open every pack and merge duplicates into one pool.
    pub fn generate(&self, rng: &mut PoolRng) -> Pool {
        let mut pool = Pool::new();
        for index in 0..self.pack_count {
            let mut pack_rng = rng.fork();
            let pack = self.open_pack(&mut pack_rng);
            debug!(pack = index, cards = pack.len(), "opened pack");
            for card in pack {
                pool.add_one(card);
            }
        }
        pool
    }
}
