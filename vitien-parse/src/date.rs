//! Transaction date extraction: `dd/MM/yyyy` or `dd/MM`, defaulting to today.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::ops::Range;

/// Outcome of a date scan. `span` is set whenever date-shaped text matched,
/// even if it named an impossible day — the junk still has to leave the
/// description.
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatch {
    pub date: NaiveDate,
    pub span: Option<Range<usize>>,
}

pub struct DateExtractor {
    re: Regex,
}

impl DateExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b")?,
        })
    }

    /// First date in `text`; `today` fills in a missing year and covers
    /// missing or invalid dates entirely. Plain calendar dates, no timezone.
    pub fn extract(&self, text: &str, today: NaiveDate) -> DateMatch {
        let Some(caps) = self.re.captures(text) else {
            return DateMatch {
                date: today,
                span: None,
            };
        };
        let whole = caps.get(0).unwrap();
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_else(|| today.year());

        DateMatch {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today),
            span: Some(whole.range()),
        }
    }
}
