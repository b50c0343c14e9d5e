//! Amount extraction: digit-based first, spelled-out numerals as fallback.

use anyhow::Result;
use regex::Regex;
use std::ops::Range;

use crate::number_words::NumberPhraseFinder;

/// A resolved amount plus where it sat in the scanned line.
///
/// `span` is the byte range in the normalized line for digit matches; the
/// word-phrase fallback matched the raw line instead, so it carries only the
/// matched text.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountMatch {
    pub value: f64,
    pub text: String,
    pub span: Option<Range<usize>>,
}

pub struct AmountExtractor {
    digits: Regex,
    phrases: NumberPhraseFinder,
}

impl AmountExtractor {
    pub fn new() -> Result<Self> {
        let digits = Regex::new(
            r"(?i)(\d+(?:[.,]\d+)*)\s*(nghìn|nghin|ngàn|ngan|triệu|trieu|tr|tỷ|tỉ|ty|ti|k|m)?\b",
        )?;
        Ok(Self {
            digits,
            phrases: NumberPhraseFinder::new()?,
        })
    }

    /// First positive amount in the line.
    ///
    /// Scans `normalized` for digit tokens, skipping anything inside `skip`
    /// (the matched date — "15/08" must not read as fifteen đồng). When no
    /// digit token qualifies, falls back to spelled-out numerals in the
    /// `original` pre-normalization text.
    pub fn extract(
        &self,
        normalized: &str,
        original: &str,
        skip: Option<&Range<usize>>,
    ) -> Option<AmountMatch> {
        for caps in self.digits.captures_iter(normalized) {
            let whole = caps.get(0).unwrap();
            if let Some(skip) = skip {
                if whole.start() < skip.end && skip.start < whole.end() {
                    continue;
                }
            }
            let Some(number) = parse_separated(&caps[1]) else {
                continue;
            };
            let value = number * unit_multiplier(caps.get(2).map(|m| m.as_str()));
            if value > 0.0 {
                return Some(AmountMatch {
                    value,
                    text: whole.as_str().to_string(),
                    span: Some(whole.range()),
                });
            }
        }

        let phrase = self.phrases.find(original)?;
        if phrase.value <= 0 {
            return None;
        }
        Some(AmountMatch {
            value: phrase.value as f64,
            text: phrase.text,
            span: None,
        })
    }
}

/// Resolve `.`/`,` inside a numeral: the last occurrence is the decimal
/// point, everything earlier is grouping and gets stripped. A single
/// occurrence is therefore also a decimal point — "1.250.000" reads as 1250,
/// which is the historical rule this engine reproduces on purpose.
fn parse_separated(raw: &str) -> Option<f64> {
    let Some(last) = raw.rfind(['.', ',']) else {
        return raw.parse().ok();
    };
    let mut cleaned = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        match c {
            '.' | ',' if i == last => cleaned.push('.'),
            '.' | ',' => {}
            _ => cleaned.push(c),
        }
    }
    cleaned.parse().ok()
}

fn unit_multiplier(unit: Option<&str>) -> f64 {
    match unit.map(|u| u.to_lowercase()).as_deref() {
        Some("k" | "nghìn" | "nghin" | "ngàn" | "ngan") => 1_000.0,
        Some("m" | "tr" | "triệu" | "trieu") => 1_000_000.0,
        Some("tỷ" | "tỉ" | "ty" | "ti") => 1_000_000_000.0,
        _ => 1.0,
    }
}
