//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table per registered company:
//! - <company_table>(id, question_text, difficulty, type)
//!
//! Table names come from the company registry only; no statement ever
//! interpolates a caller-supplied name.

pub mod schema;
pub mod sqlite;

pub use sqlite::{CompanyCount, QuestionStore, StoreStats};
