//! Income/expense classification from indicator vocabulary.

use anyhow::Result;
use regex::Regex;
use std::ops::Range;

use vitien_core::TransactionType;

/// Classification plus the matched indicator span (subtracted from the
/// description later). `span` is `None` for the Expense default.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMatch {
    pub kind: TransactionType,
    pub span: Option<Range<usize>>,
}

pub struct TypeClassifier {
    income: Regex,
    income_loose: Regex,
    expense: Regex,
    expense_loose: Regex,
}

impl TypeClassifier {
    pub fn new() -> Result<Self> {
        let income = Regex::new(
            r"(?i)\b(?:thu nhập|nhận lương|nhận được|được cho|được thưởng|tiền về|lương về|bán được|hoàn tiền|thưởng|trúng|thu|nhận|thêm)\b",
        )?;
        let expense = Regex::new(
            r"(?i)\b(?:chi tiêu|trả tiền|thanh toán|trả nợ|trả góp|đóng tiền|mua|tiêu|tốn|mất|đóng|trả|chi)\b",
        )?;
        // loose substring fallbacks, knowingly unanchored
        let income_loose = Regex::new(r"(?i)thu|nhận|thêm")?;
        let expense_loose = Regex::new(r"(?i)trả|chi|tiêu")?;
        Ok(Self {
            income,
            income_loose,
            expense,
            expense_loose,
        })
    }

    /// Income vocabulary wins over expense vocabulary; no hit at all means
    /// Expense, the safe assumption for a spending tracker.
    pub fn classify(&self, text: &str) -> TypeMatch {
        if let Some(m) = self
            .income
            .find(text)
            .or_else(|| self.income_loose.find(text))
        {
            return TypeMatch {
                kind: TransactionType::Income,
                span: Some(m.range()),
            };
        }
        if let Some(m) = self
            .expense
            .find(text)
            .or_else(|| self.expense_loose.find(text))
        {
            return TypeMatch {
                kind: TransactionType::Expense,
                span: Some(m.range()),
            };
        }
        TypeMatch {
            kind: TransactionType::Expense,
            span: None,
        }
    }
}
