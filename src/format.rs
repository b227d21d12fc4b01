/* For printing generated tables as literals the engine can paste in */

use crate::win::{Occ, N_WORDS};

// one literal per line, word 0 first:
// 0xff80808080808080,
// 0xfff0aa80faf0aa80,
// ...
pub fn hex_words(words: &[u64; N_WORDS]) -> String {
    let lines: Vec<String> = words.iter().map(|w| format!("{:#x},", w)).collect();
    lines.join("\n")
}

pub fn rust_array(name: &str, words: &[u64; N_WORDS]) -> String {
    let body: Vec<String> = words.iter().map(|w| format!("    {:#018x},", w)).collect();
    format!(
        "static {}: [u64; {}] = [\n{}\n];",
        name,
        N_WORDS,
        body.join("\n")
    )
}

// diagnostic line for one occupancy, e.g. "111 1"
pub fn pattern_line(occ: Occ, won: bool) -> String {
    format!("{:b} {}", occ, won as u8)
}
