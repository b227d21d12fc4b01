/* SEARCH PARAMETERS */

// the engine's block table has 2^SLOT_BITS entries
pub const SLOT_BITS: u32 = 17;

// widest table the search will allocate a bitset for
pub(crate) const MAX_SLOT_BITS: u32 = 28;

// each sample is drawn uniformly from [0, SAMPLE_MAX]
pub const SAMPLE_MAX: u64 = (1 << 31) - 1;

// candidates are the AND of this many samples. more samples bias
// towards sparse multipliers; 1 is an unbiased uniform draw
pub const SAMPLES_PER_CANDIDATE: u32 = 3;

// log progress every this many candidates
pub const PROGRESS_EVERY: u64 = 10_000;
