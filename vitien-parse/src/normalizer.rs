//! Rewrites spelled-out amounts into digit strings before extraction.

use anyhow::Result;
use regex::Regex;
use std::ops::Range;

use crate::number_words::{build_patterns, interpret};

/// Defensive bound on rewrite rounds per pattern; a successful replacement
/// strictly reduces the remaining word phrases, so this never binds in
/// practice.
const MAX_PASSES: usize = 8;

/// In-place number-word rewriter.
///
/// Digit tokens already in the line — optionally carrying a unit suffix like
/// "200k" or "1.5 triệu" — are protected by span, so a later pattern can
/// never reinterpret them.
pub struct TextNormalizer {
    patterns: Vec<Regex>,
    protected: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let protected = Regex::new(
            r"(?i)\d+(?:[.,]\d+)*(?:\s*(?:k|nghìn|nghin|ngàn|ngan|m|tr|triệu|trieu|tỷ|tỉ|ty|ti)\b)?",
        )?;
        Ok(Self {
            patterns: build_patterns()?,
            protected,
        })
    }

    /// Replace every recognizable number-word phrase with its digit value.
    /// Idempotent on lines that contain no Vietnamese number words.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = text.to_string();
        for pattern in &self.patterns {
            for _ in 0..MAX_PASSES {
                let protected: Vec<Range<usize>> = self
                    .protected
                    .find_iter(&out)
                    .map(|m| m.range())
                    .collect();

                let mut replacements: Vec<(Range<usize>, String)> = Vec::new();
                for m in pattern.find_iter(&out) {
                    if protected.iter().any(|p| m.start() < p.end && p.start < m.end()) {
                        continue;
                    }
                    if let Some(value) = interpret(m.as_str()) {
                        replacements.push((m.range(), value.to_string()));
                    }
                }
                if replacements.is_empty() {
                    break;
                }
                // splice end-to-start so earlier ranges stay valid
                for (range, digits) in replacements.into_iter().rev() {
                    out.replace_range(range, &digits);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_idempotent_without_number_words() {
        let text = "đi chợ mua rau với mẹ";
        assert_eq!(normalizer().normalize(text), text);
    }

    #[test]
    fn test_protects_digit_unit_tokens() {
        assert_eq!(normalizer().normalize("200k đi ăn"), "200k đi ăn");
        assert_eq!(
            normalizer().normalize("1.5 triệu tiền nhà"),
            "1.5 triệu tiền nhà"
        );
    }

    #[test]
    fn test_rewrites_word_phrase() {
        assert_eq!(
            normalizer().normalize("chi hai trăm nghìn tiền điện"),
            "chi 200000 tiền điện"
        );
    }

    #[test]
    fn test_rewrites_magnitude_groups() {
        assert_eq!(
            normalizer().normalize("một triệu hai trăm nghìn chi sửa xe"),
            "1200000 chi sửa xe"
        );
    }

    #[test]
    fn test_rewrites_every_phrase_in_line() {
        assert_eq!(
            normalizer().normalize("hai mươi nghìn với ba mươi nghìn"),
            "20000 với 30000"
        );
    }

    #[test]
    fn test_mixed_digits_and_words() {
        assert_eq!(
            normalizer().normalize("200k và năm mươi nghìn"),
            "200k và 50000"
        );
    }

    #[test]
    fn test_tens_only_phrase() {
        assert_eq!(normalizer().normalize("mua bốn chục trứng"), "mua 40 trứng");
    }
}
