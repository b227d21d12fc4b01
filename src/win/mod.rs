/*
Win table for 3x3 blocks. Bit i of the table is set if the occupancy
whose bit-level representation is i contains a full line. Only one
side's pieces are included. For example 0b000000111 corresponds to:

X X X
_ _ _
_ _ _
*/
pub mod pack;

pub use crate::win::pack::*;

pub type Occ = u16;

pub const N_PATTERNS: usize = 512;
pub const N_WORDS: usize = N_PATTERNS / 64;

pub const BLOCK_OCC: Occ = 0b111111111;

pub const ROWS: [Occ; 3] = [0b000000111, 0b000111000, 0b111000000];
pub const COLS: [Occ; 3] = [0b001001001, 0b010010010, 0b100100100];
pub const DIAGS: [Occ; 2] = [0b001010100, 0b100010001];

pub const LINES: [Occ; 8] = [
    ROWS[0], ROWS[1], ROWS[2], COLS[0], COLS[1], COLS[2], DIAGS[0], DIAGS[1],
];

pub const fn is_winning(occ: Occ) -> bool {
    let mut i = 0;
    while i < LINES.len() {
        if occ & LINES[i] == LINES[i] {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_win_table() -> [u64; N_WORDS] {
    let mut words = [0u64; N_WORDS];
    let mut occ = 0;
    while occ < N_PATTERNS {
        if is_winning(occ as Occ) {
            words[occ / 64] |= 1u64 << (occ % 64);
        }
        occ += 1;
    }
    words
}

pub static WIN_TABLE: [u64; N_WORDS] = build_win_table();

// all 512 occupancies, built LSB-first: each step shifts the prefix
// left and appends 0 then 1
pub fn gen_patterns() -> Vec<Occ> {
    gen_patterns_from(0, 9)
}

fn gen_patterns_from(cur: Occ, remaining: u8) -> Vec<Occ> {
    if remaining == 0 {
        return vec![cur];
    }
    let mut patterns = gen_patterns_from(cur << 1, remaining - 1);
    patterns.extend(gen_patterns_from((cur << 1) | 1, remaining - 1));
    patterns
}

// classification indexed by occupancy value
pub fn compile() -> [bool; N_PATTERNS] {
    let mut table = [false; N_PATTERNS];
    for occ in gen_patterns() {
        table[occ as usize] = is_winning(occ);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        for &line in LINES.iter() {
            assert_eq!(line.count_ones(), 3);
            assert!(is_winning(line));
        }
        assert!(is_winning(0b000000111));
        assert!(is_winning(0b010010010));
        assert!(is_winning(0b001010100));
        assert!(is_winning(BLOCK_OCC));
    }

    #[test]
    fn non_lines() {
        assert!(!is_winning(0));
        assert!(!is_winning(0b000000101));
        // X O X / X O O / O X X has no line for either shape
        assert!(!is_winning(0b110001101));
        assert!(!is_winning(0b001110010));
    }

    #[test]
    fn patterns_cover_domain() {
        let patterns = gen_patterns();
        assert_eq!(patterns.len(), N_PATTERNS);
        for (i, &p) in patterns.iter().enumerate() {
            assert_eq!(p as usize, i);
        }
    }

    #[test]
    fn supersets_of_lines_win() {
        let table = compile();
        for occ in 0..N_PATTERNS as Occ {
            let contains_line = LINES.iter().any(|&l| occ & l == l);
            assert_eq!(table[occ as usize], contains_line, "occ {:09b}", occ);
        }
        assert_eq!(table.iter().filter(|&&w| w).count(), 282);
    }
}
