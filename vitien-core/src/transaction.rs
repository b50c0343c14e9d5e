//! Transaction candidate types shared across the entry pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A user-defined category, supplied to the parser as a read-only snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One structured candidate extracted from a free-text line.
///
/// Held in memory for user review; persistence happens elsewhere through the
/// batch-create API once the user confirms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Always strictly positive; the sign lives in `kind`.
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ParsedTransaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }
}

/// Request body for the external batch-create endpoint:
/// `{"transactions": [{type, amount, description, date, categoryId}]}`
#[derive(Debug, Clone, Serialize)]
pub struct BatchCreateRequest {
    pub transactions: Vec<TransactionDraft>,
}

impl BatchCreateRequest {
    pub fn new(transactions: &[ParsedTransaction]) -> Self {
        Self {
            transactions: transactions.iter().map(TransactionDraft::from).collect(),
        }
    }
}

/// One entry of the batch-create request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl From<&ParsedTransaction> for TransactionDraft {
    fn from(txn: &ParsedTransaction) -> Self {
        Self {
            kind: txn.kind,
            amount: txn.amount,
            description: txn.description.clone(),
            date: txn.date,
            category_id: txn.category_id().map(str::to_string),
        }
    }
}

/// Format an amount in đồng with dot grouping, e.g. `50.000 ₫`.
pub fn format_vnd(amount: f64) -> String {
    let n = amount.round() as i64;
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if n < 0 {
        format!("-{} ₫", grouped)
    } else {
        format!("{} ₫", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedTransaction {
        ParsedTransaction {
            kind: TransactionType::Expense,
            amount: 50000.0,
            date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            description: "ăn sáng".to_string(),
            category: Some(Category::new("c1", "Ăn uống")),
        }
    }

    #[test]
    fn test_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"EXPENSE\""
        );
    }

    #[test]
    fn test_parsed_transaction_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "EXPENSE");
        assert_eq!(json["amount"], 50000.0);
        assert_eq!(json["date"], "2025-08-15");
        assert_eq!(json["category"]["name"], "Ăn uống");
    }

    #[test]
    fn test_missing_category_is_omitted() {
        let mut txn = sample();
        txn.category = None;
        let json = serde_json::to_value(txn).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_batch_request_shape() {
        let request = BatchCreateRequest::new(&[sample()]);
        let json = serde_json::to_value(request).unwrap();
        let entry = &json["transactions"][0];
        assert_eq!(entry["type"], "EXPENSE");
        assert_eq!(entry["date"], "2025-08-15");
        assert_eq!(entry["categoryId"], "c1");
        assert!(entry.get("category").is_none());
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(50000.0), "50.000 ₫");
        assert_eq!(format_vnd(1250000.0), "1.250.000 ₫");
        assert_eq!(format_vnd(999.0), "999 ₫");
    }
}
