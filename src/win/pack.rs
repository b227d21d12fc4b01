use crate::win::{Occ, BLOCK_OCC, N_PATTERNS, N_WORDS};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PackError {
    #[error("bit string must hold {expected} bits, got {0}", expected = N_PATTERNS)]
    BadLength(usize),
    #[error("bit string holds {0:?} at position {1}; only '0' and '1' allowed")]
    BadDigit(char, usize),
    #[error("bad 64-bit chunk: {0}")]
    BadChunk(#[from] ParseIntError),
}

// word k holds occupancies [64k, 64k + 64), bit (occ % 64) of word (occ / 64)
pub fn pack(table: &[bool; N_PATTERNS]) -> [u64; N_WORDS] {
    let mut words = [0u64; N_WORDS];
    for (occ, &won) in table.iter().enumerate() {
        words[occ / 64] |= (won as u64) << (occ % 64);
    }
    words
}

// one '0'/'1' per occupancy, from 511 down to 0
pub fn to_bit_string(table: &[bool; N_PATTERNS]) -> String {
    table
        .iter()
        .rev()
        .map(|&won| if won { '1' } else { '0' })
        .collect()
}

// Splits the bit string into 64-bit chunks. The first chunk holds the
// highest occupancies, so it becomes the last word.
pub fn pack_bit_string(bits: &str) -> Result<[u64; N_WORDS], PackError> {
    if bits.len() != N_PATTERNS {
        return Err(PackError::BadLength(bits.len()));
    }
    // from_str_radix alone would take a leading '+' on a chunk
    if let Some((i, c)) = bits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        return Err(PackError::BadDigit(c, i));
    }
    let mut words = [0u64; N_WORDS];
    for chunk_i in 0..N_WORDS {
        let chunk = &bits[chunk_i * 64..(chunk_i + 1) * 64];
        words[N_WORDS - 1 - chunk_i] = u64::from_str_radix(chunk, 2)?;
    }
    Ok(words)
}

// consumer-side lookup, the way the engine reads its WIN_TABLE
#[inline(always)]
pub fn block_won(words: &[u64; N_WORDS], occ: Occ) -> bool {
    assert_eq!(occ & !BLOCK_OCC, 0);
    words[occ as usize / 64] & (1 << (occ % 64)) != 0
}

pub fn unpack(words: &[u64; N_WORDS]) -> [bool; N_PATTERNS] {
    let mut table = [false; N_PATTERNS];
    for occ in 0..N_PATTERNS {
        table[occ] = block_won(words, occ as Occ);
    }
    table
}
