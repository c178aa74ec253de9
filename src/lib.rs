//! # Qbank - Interview Question Bank
//!
//! Per-company tracking of interview questions, backed by SQLite.
//!
//! Qbank provides:
//! - A question entity with fixed difficulty and type vocabularies
//! - A company registry mapping each company to its own validated table
//! - SQLite-backed storage with per-company CRUD and aggregate counts
//! - A TOML config layer for the database location and company list

pub mod company;
pub mod config;
pub mod question;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use company::CompanyRegistry;
pub use question::{Difficulty, Question, QuestionType};
pub use storage::QuestionStore;

/// Result type alias for Qbank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Qbank operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown company: {0}")]
    UnknownCompany(String),

    #[error("Companies {first:?} and {second:?} both map to table {table:?}")]
    TableCollision {
        first: String,
        second: String,
        table: String,
    },

    #[error("Question text must not be empty")]
    EmptyQuestion,

    #[error("Question has no id; it was never persisted")]
    MissingId,

    #[error("No question with id {id} for company {company:?}")]
    QuestionNotFound { company: String, id: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
