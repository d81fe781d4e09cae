// src/utils/collate.rs

//! Locale-style string ordering for short identifier suffixes.
//!
//! Approximates the root collation a browser applies in `localeCompare`
//! for the characters that appear in USNs: punctuation and whitespace sort
//! before digits, digits before letters, letters compare case-insensitively
//! and only fall back to case (lowercase first) when otherwise equal.
//!
//! Diacritics are not folded: `é` compares by code point and lands after
//! `z`, where a browser would place it next to `e`.

use std::cmp::Ordering;

/// Primary weight class of a character.
fn class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() {
        1
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        4
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compare two strings the way a locale-aware comparison would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(|c| (class(c), fold(c)))
        .cmp(b.chars().map(|c| (class(c), fold(c))));
    if primary != Ordering::Equal {
        return primary;
    }

    // Tertiary: first case difference decides, lowercase first.
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    Ordering::Equal
}

/// The last `n` characters of `s` (all of `s` when shorter).
pub fn trailing(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[idx..],
        _ if n == 0 => "",
        _ => s,
    }
}
