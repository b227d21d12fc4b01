pub mod config;

use crate::board::*;
use crate::magic::config::*;
use bit_vec::BitVec;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("slot width must be in 1..={max}, got {0}", max = MAX_SLOT_BITS)]
    InvalidSlotBits(u32),
    #[error(
        "keys {first:#x} and {second:#x} agree in their low {slot_bits} bits; \
         no multiplier can separate them"
    )]
    Unseparable {
        first: BoardKey,
        second: BoardKey,
        slot_bits: u32,
    },
    #[error("no perfect multiplier after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
    #[error("candidate source ran dry after {attempts} attempts")]
    CandidatesExhausted { attempts: u64 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MagicResult {
    pub magic: u64,
    pub attempts: u64,
}

#[inline(always)]
fn slot_mask(slot_bits: u32) -> u64 {
    (1u64 << slot_bits) - 1
}

#[inline(always)]
pub fn slot(key: BoardKey, magic: u64, slot_bits: u32) -> usize {
    ((key as u64).wrapping_mul(magic) & slot_mask(slot_bits)) as usize
}

// exact collision check. `used` is cleared and reused by the caller
// between attempts; it must hold 2^slot_bits entries
pub fn is_perfect_with(keys: &[BoardKey], magic: u64, slot_bits: u32, used: &mut BitVec) -> bool {
    debug_assert_eq!(used.len(), 1 << slot_bits);
    used.clear();
    for &key in keys {
        let s = slot(key, magic, slot_bits);
        if used[s] {
            return false;
        }
        used.set(s, true);
    }
    true
}

pub fn is_perfect(keys: &[BoardKey], magic: u64, slot_bits: u32) -> bool {
    let mut used = BitVec::from_elem(1 << slot_bits, false);
    is_perfect_with(keys, magic, slot_bits, &mut used)
}

// The low bits of a product depend only on the low bits of its factors, so
// two keys congruent mod 2^slot_bits land in the same slot for every
// multiplier. Returns the first such pair.
pub fn find_unseparable(keys: &[BoardKey], slot_bits: u32) -> Option<(BoardKey, BoardKey)> {
    let mask = slot_mask(slot_bits);
    let mut seen: HashMap<u64, BoardKey> = HashMap::with_capacity(keys.len());
    for &key in keys {
        if let Some(&first) = seen.get(&(key as u64 & mask)) {
            if first != key {
                return Some((first, key));
            }
        }
        seen.insert(key as u64 & mask, key);
    }
    None
}

// infinite stream of candidate multipliers, each the AND of `samples`
// uniform draws from [0, SAMPLE_MAX]
pub struct Candidates<R: Rng> {
    rng: R,
    samples: u32,
}

impl<R: Rng> Candidates<R> {
    pub fn new(rng: R, samples: u32) -> Candidates<R> {
        assert!(samples >= 1, "need at least one sample per candidate");
        Candidates { rng, samples }
    }
}

impl<R: Rng> Iterator for Candidates<R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let mut candidate = SAMPLE_MAX;
        for _ in 0..self.samples {
            candidate &= self.rng.gen_range(0, SAMPLE_MAX + 1);
        }
        Some(candidate)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct MagicSearch {
    pub slot_bits: u32,
    // None keeps drawing for as long as the candidates last
    pub max_attempts: Option<u64>,
    pub progress_every: u64,
}

impl Default for MagicSearch {
    fn default() -> MagicSearch {
        MagicSearch {
            slot_bits: SLOT_BITS,
            max_attempts: None,
            progress_every: PROGRESS_EVERY,
        }
    }
}

impl MagicSearch {
    pub fn new(slot_bits: u32) -> MagicSearch {
        MagicSearch {
            slot_bits,
            ..MagicSearch::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> MagicSearch {
        self.max_attempts = Some(max_attempts);
        self
    }

    // accepts the first candidate that maps every key to its own slot
    pub fn run<I>(&self, keys: &[BoardKey], candidates: I) -> Result<MagicResult, SearchError>
    where
        I: IntoIterator<Item = u64>,
    {
        if self.slot_bits == 0 || self.slot_bits > MAX_SLOT_BITS {
            return Err(SearchError::InvalidSlotBits(self.slot_bits));
        }
        if let Some((first, second)) = find_unseparable(keys, self.slot_bits) {
            warn!(
                "keys {:#x} and {:#x} collide mod 2^{}; search cannot succeed",
                first,
                second,
                self.slot_bits
            );
            return Err(SearchError::Unseparable {
                first,
                second,
                slot_bits: self.slot_bits,
            });
        }

        info!(
            "searching for a magic over {} keys into 2^{} slots",
            keys.len(),
            self.slot_bits
        );
        let mut used = BitVec::from_elem(1 << self.slot_bits, false);
        let mut attempts: u64 = 0;
        let mut candidates = candidates.into_iter();
        loop {
            // the cap wins over a source that runs dry at the same moment
            if self.max_attempts.map_or(false, |max| attempts >= max) {
                return Err(SearchError::AttemptsExhausted { attempts });
            }
            let magic = match candidates.next() {
                Some(magic) => magic,
                None => return Err(SearchError::CandidatesExhausted { attempts }),
            };
            attempts += 1;
            if is_perfect_with(keys, magic, self.slot_bits, &mut used) {
                info!("found magic {} after {} attempts", magic, attempts);
                return Ok(MagicResult { magic, attempts });
            }
            if self.progress_every != 0 && attempts % self.progress_every == 0 {
                debug!("{} attempts", attempts);
            }
        }
    }
}

// search over every block state with the AND-of-samples candidates.
// no seed draws one from system entropy
pub fn find_magic(
    search: &MagicSearch,
    samples: u32,
    seed: Option<u64>,
) -> Result<MagicResult, SearchError> {
    let rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    search.run(&encoded_boards(), Candidates::new(rng, samples))
}
