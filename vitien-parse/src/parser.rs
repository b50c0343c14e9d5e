//! Line and batch orchestration over the extraction stages.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::warn;

use vitien_core::{Category, ParsedTransaction, categorizer};

use crate::amount::AmountExtractor;
use crate::classify::TypeClassifier;
use crate::date::DateExtractor;
use crate::description;
use crate::normalizer::TextNormalizer;

/// Parses one free-text line into a transaction candidate.
///
/// All pattern sets compile once at construction; parsing itself is pure —
/// no I/O, no shared state, each line independent of every other.
pub struct LineParser {
    normalizer: TextNormalizer,
    amounts: AmountExtractor,
    dates: DateExtractor,
    types: TypeClassifier,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new()?,
            amounts: AmountExtractor::new()?,
            dates: DateExtractor::new()?,
            types: TypeClassifier::new()?,
        })
    }

    /// Parse a line against the caller's category snapshot.
    ///
    /// `None` when no positive amount can be found — the only hard
    /// requirement. Everything else degrades: missing date becomes today,
    /// missing type becomes Expense, missing category stays unset.
    pub fn parse_line(&self, line: &str, categories: &[Category]) -> Option<ParsedTransaction> {
        self.parse_line_at(line, categories, Local::now().date_naive())
    }

    /// Like [`LineParser::parse_line`] with an explicit "today", which keeps
    /// date defaulting deterministic under test.
    pub fn parse_line_at(
        &self,
        line: &str,
        categories: &[Category],
        today: NaiveDate,
    ) -> Option<ParsedTransaction> {
        match self.try_parse(line, categories, today) {
            Ok(parsed) => parsed,
            Err(err) => {
                // best-effort contract: swallow, log, move on
                warn!("dropping unparseable line {line:?}: {err:#}");
                None
            }
        }
    }

    fn try_parse(
        &self,
        line: &str,
        categories: &[Category],
        today: NaiveDate,
    ) -> Result<Option<ParsedTransaction>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let normalized = self.normalizer.normalize(line);
        let date = self.dates.extract(&normalized, today);
        let Some(amount) = self.amounts.extract(&normalized, line, date.span.as_ref()) else {
            return Ok(None);
        };
        let kind = self.types.classify(&normalized);

        let mut spans = Vec::new();
        if let Some(span) = kind.span.clone() {
            spans.push(span);
        }
        if let Some(span) = date.span.clone() {
            spans.push(span);
        }
        let loose_amount = match &amount.span {
            Some(span) => {
                spans.push(span.clone());
                None
            }
            None => Some(amount.text.as_str()),
        };
        let desc = description::derive(&normalized, spans, loose_amount);

        let category = categorizer::match_category(&desc, categories).cloned();

        Ok(Some(ParsedTransaction {
            kind: kind.kind,
            amount: amount.value,
            date: date.date,
            description: desc,
            category,
        }))
    }
}

/// Splits multi-line input and parses each non-blank line independently.
///
/// Lines that yield nothing are dropped silently — the batch result is
/// simply shorter than the input, never an error. Input order is preserved.
pub struct BatchParser {
    line: LineParser,
}

impl BatchParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            line: LineParser::new()?,
        })
    }

    pub fn parse(&self, input: &str, categories: &[Category]) -> Vec<ParsedTransaction> {
        self.parse_at(input, categories, Local::now().date_naive())
    }

    pub fn parse_at(
        &self,
        input: &str,
        categories: &[Category],
        today: NaiveDate,
    ) -> Vec<ParsedTransaction> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.line.parse_line_at(line, categories, today))
            .collect()
    }
}
