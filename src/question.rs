//! Question entity and its fixed vocabularies
//!
//! Every question carries a difficulty and a type drawn from small closed
//! sets. The store persists them as strings, so both enums round-trip
//! through `as_str`/`FromStr`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty rating of an interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Get the string representation stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Get all difficulty levels, easiest first
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "med" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            "expert" | "x" => Ok(Difficulty::Expert),
            _ => Err(Error::Parse(format!("Unknown difficulty: {}", s))),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of an interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Coding, system design, domain knowledge
    Technical,
    /// Salary, background, company-fit questions
    Hr,
    /// "Tell me about a time when..."
    Behavioral,
    /// Hypothetical "what would you do if..."
    Situational,
}

impl QuestionType {
    /// Get the string representation stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "Technical",
            QuestionType::Hr => "HR",
            QuestionType::Behavioral => "Behavioral",
            QuestionType::Situational => "Situational",
        }
    }

    /// Get all question types
    pub fn all() -> &'static [QuestionType] {
        &[
            QuestionType::Technical,
            QuestionType::Hr,
            QuestionType::Behavioral,
            QuestionType::Situational,
        ]
    }
}

impl FromStr for QuestionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "technical" | "tech" | "t" => Ok(QuestionType::Technical),
            "hr" => Ok(QuestionType::Hr),
            "behavioral" | "behavioural" | "b" => Ok(QuestionType::Behavioral),
            "situational" | "s" => Ok(QuestionType::Situational),
            _ => Err(Error::Parse(format!("Unknown question type: {}", s))),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An interview question.
///
/// `id` is `None` until the store persists the question; a loaded question
/// carries the id of exactly one row in exactly one company's table.
///
/// `difficulty` and `qtype` are optional because the store does not enforce
/// the vocabularies: rows written by other tools may carry NULL or values
/// outside the closed sets, and those rows must still surface when listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identity, absent before the first insert
    pub id: Option<i64>,
    /// The question body, never empty
    pub text: String,
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "type")]
    pub qtype: Option<QuestionType>,
}

impl Question {
    /// Create a new, not-yet-persisted question
    pub fn new(text: impl Into<String>, difficulty: Difficulty, qtype: QuestionType) -> Self {
        Self {
            id: None,
            text: text.into(),
            difficulty: Some(difficulty),
            qtype: Some(qtype),
        }
    }

    /// Create a question loaded from the store, with its assigned id
    pub fn with_id(
        id: i64,
        text: impl Into<String>,
        difficulty: Difficulty,
        qtype: QuestionType,
    ) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
            difficulty: Some(difficulty),
            qtype: Some(qtype),
        }
    }

    /// Difficulty label for display, "-" when unset
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(|d| d.as_str()).unwrap_or("-")
    }

    /// Type label for display, "-" when unset
    pub fn qtype_label(&self) -> &'static str {
        self.qtype.map(|t| t.as_str()).unwrap_or("-")
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} - {}] {}",
            self.difficulty_label(),
            self.qtype_label(),
            self.text
        )
    }
}
