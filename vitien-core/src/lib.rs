//! vitien-core: shared transaction types and category matching for the
//! free-text entry pipeline.

pub mod categorizer;
pub mod transaction;

pub use categorizer::match_category;
pub use transaction::{
    BatchCreateRequest, Category, ParsedTransaction, TransactionDraft, TransactionType, format_vnd,
};
