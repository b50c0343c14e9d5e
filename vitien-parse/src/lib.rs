//! vitien-parse: turns free-text Vietnamese lines ("chi 50 nghìn ăn sáng")
//! into structured transaction candidates for user review.
//!
//! Best-effort by design: the only hard requirement on a line is a positive
//! amount. Everything else — date, income/expense direction, category —
//! degrades to a sensible default, and the caller shows the result to a
//! human before anything is persisted.

pub mod amount;
pub mod classify;
pub mod date;
pub mod description;
pub mod normalizer;
pub mod number_words;
pub mod parser;

pub use amount::{AmountExtractor, AmountMatch};
pub use classify::{TypeClassifier, TypeMatch};
pub use date::{DateExtractor, DateMatch};
pub use normalizer::TextNormalizer;
pub use number_words::{NumberPhraseFinder, PhraseMatch, interpret};
pub use parser::{BatchParser, LineParser};
