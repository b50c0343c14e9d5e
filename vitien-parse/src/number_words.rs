//! Spelled-out Vietnamese numerals: lexicon, interpreter, phrase finder.
//!
//! Amounts dictated through speech-to-text arrive as words ("hai trăm năm
//! mươi nghìn") rather than digits. This module turns such phrases into
//! integers and locates the best one inside a free-text line.

use anyhow::Result;
use regex::Regex;

/// Number words and their values. Accent-stripped spellings resolve the same
/// way so ASCII-typed input works. `không` (0) is deliberately absent: in
/// free text it is negation ("không có…") far more often than a numeral, and
/// a zero amount is never usable.
const NUMBER_WORDS: &[(&str, i64)] = &[
    ("một", 1),
    ("mốt", 1),
    ("mot", 1),
    ("hai", 2),
    ("ba", 3),
    ("bốn", 4),
    ("bon", 4),
    ("tư", 4),
    ("tu", 4),
    ("năm", 5),
    ("lăm", 5),
    ("nam", 5),
    ("lam", 5),
    ("sáu", 6),
    ("sau", 6),
    ("bảy", 7),
    ("bay", 7),
    ("tám", 8),
    ("tam", 8),
    ("chín", 9),
    ("chin", 9),
    ("mười", 10),
    ("mươi", 10),
    ("muoi", 10),
    ("chục", 10),
    ("chuc", 10),
    ("trăm", 100),
    ("tram", 100),
    ("nghìn", 1_000),
    ("nghin", 1_000),
    ("ngàn", 1_000),
    ("ngan", 1_000),
    ("triệu", 1_000_000),
    ("trieu", 1_000_000),
    ("tỷ", 1_000_000_000),
    ("tỉ", 1_000_000_000),
    ("ty", 1_000_000_000),
    ("ti", 1_000_000_000),
];

fn lookup(token: &str) -> Option<i64> {
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, value)| *value)
}

/// Interpret one whitespace-tokenized number phrase.
///
/// Unrecognized tokens (connectors like "lẻ", stray words) are skipped, not
/// errors. `None` only when no token resolved at all.
pub fn interpret(phrase: &str) -> Option<i64> {
    // "hai mươi mốt" — the final-position variant of "một"
    let rewritten = phrase.to_lowercase().replace("mốt", "một");
    let tokens: Vec<&str> = rewritten.split_whitespace().collect();

    let mut result: i64 = 0;
    let mut current: i64 = 0;
    let mut resolved = false;
    let mut i = 0;

    while i < tokens.len() {
        let Some(value) = lookup(tokens[i]) else {
            i += 1;
            continue;
        };
        resolved = true;

        if value >= 1_000 {
            let group = if current == 0 { 1 } else { current };
            result += group * value;
            current = 0;
            i += 1;
        } else if value == 100 {
            current = if current == 0 { 100 } else { current * 100 };
            i += 1;
        } else if value == 10 {
            current = if current == 0 { 10 } else { current * 10 };
            i += 1;
            // "mười lăm" — a trailing ones word rides on the tens
            if let Some(ones) = tokens.get(i).and_then(|t| lookup(t)) {
                if ones < 10 {
                    current += ones;
                    i += 1;
                }
            }
        } else if tokens.get(i + 1).and_then(|t| lookup(t)) == Some(10) {
            // "năm mươi" — the ones word is the tens multiplier
            current += value * 10;
            i += 2;
            if let Some(ones) = tokens.get(i).and_then(|t| lookup(t)) {
                if ones < 10 {
                    current += ones;
                    i += 1;
                }
            }
        } else {
            current += value;
            i += 1;
        }
    }

    if !resolved {
        return None;
    }
    Some(result + current)
}

/// A number phrase located inside a longer line.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseMatch {
    pub value: i64,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Locates spelled-out number phrases with an ordered pattern list, most
/// magnitude-specific first — "năm mươi nghìn" must never truncate to "năm".
pub struct NumberPhraseFinder {
    patterns: Vec<Regex>,
}

impl NumberPhraseFinder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: build_patterns()?,
        })
    }

    /// First phrase the interpreter can resolve, trying patterns in priority
    /// order across the whole line.
    pub fn find(&self, text: &str) -> Option<PhraseMatch> {
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                if let Some(value) = interpret(m.as_str()) {
                    return Some(PhraseMatch {
                        value,
                        text: m.as_str().to_string(),
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
        None
    }
}

/// Shared ordered pattern list (also driven by the normalizer).
///
/// Bare standalone ones words are intentionally not a pattern: "năm" is also
/// "year" and "tư" a common syllable, so single-word matches would corrupt
/// ordinary text. Tens-and-above phrases are unambiguous.
pub(crate) fn build_patterns() -> Result<Vec<Regex>> {
    let ones = "một|mốt|mot|hai|ba|bốn|bon|tư|tu|năm|lăm|nam|lam|sáu|sau|bảy|bay|tám|tam|chín|chin";
    let tens = "mười|mươi|muoi|chục|chuc";
    let hundred = "trăm|tram";
    let magnitude = "nghìn|nghin|ngàn|ngan|triệu|trieu|tỷ|tỉ|ty|ti";
    let linker = "lẻ|le|linh";
    let small = format!("(?:{ones}|{tens}|{hundred}|{linker})");

    let sources = [
        // "một triệu hai trăm nghìn" — ends in a magnitude word, any tail
        format!(
            r"(?i)\b{small}(?:\s+{small})*\s+(?:{magnitude})\b(?:\s+(?:{small}|{magnitude})\b)*"
        ),
        // "hai trăm năm mươi", "một trăm linh năm"
        format!(r"(?i)\b(?:{ones})\s+(?:{hundred})\b(?:\s+(?:{ones}|{tens}|{linker})\b)*"),
        // "bốn chục", "hai mươi mốt", "mười lăm", bare "mười"
        format!(r"(?i)\b(?:(?:{ones})\s+)?(?:{tens})\b(?:\s+(?:{ones})\b)?"),
    ];

    sources
        .iter()
        .map(|source| Regex::new(source).map_err(Into::into))
        .collect()
}
