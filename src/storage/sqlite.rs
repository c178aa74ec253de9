//! SQLite storage implementation

use super::schema;
use crate::company::CompanyRegistry;
use crate::question::Question;
use crate::{Error, Result};
use rusqlite::{Connection, params};
use std::path::Path;

/// SQLite-backed store for interview questions, one table per company.
pub struct QuestionStore {
    conn: Connection,
    registry: CompanyRegistry,
}

impl QuestionStore {
    /// Open a database file (creates if doesn't exist) and ensure every
    /// registered company has its table
    pub fn open(path: &Path, registry: CompanyRegistry) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn, registry };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory(registry: CompanyRegistry) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, registry };
        store.ensure_schema()?;
        Ok(store)
    }

    /// The registry this store was opened with
    pub fn registry(&self) -> &CompanyRegistry {
        &self.registry
    }

    /// Create the table for every registered company if absent.
    ///
    /// Idempotent and safe to run on every startup; never drops or alters
    /// an existing table.
    pub fn ensure_schema(&self) -> Result<()> {
        for company in self.registry.companies() {
            let table = self.registry.table_name(company)?;
            self.conn.execute(&schema::create_table_sql(table), [])?;
        }
        tracing::debug!("Schema checked for {} companies", self.registry.len());
        Ok(())
    }

    /// Insert a new question into a company's table.
    ///
    /// The store assigns the id; callers reload via [`list_questions`]
    /// rather than relying on an inline id.
    ///
    /// [`list_questions`]: QuestionStore::list_questions
    pub fn add_question(&self, company: &str, question: &Question) -> Result<()> {
        if question.text.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }
        let table = self.registry.table_name(company)?;
        let sql = format!(
            r#"INSERT INTO "{}" (question_text, difficulty, type) VALUES (?1, ?2, ?3)"#,
            table
        );
        self.conn.execute(
            &sql,
            params![
                question.text,
                question.difficulty.map(|d| d.as_str()),
                question.qtype.map(|t| t.as_str()),
            ],
        )?;
        Ok(())
    }

    /// All questions for a company, fully populated including ids, in the
    /// table's natural order
    pub fn list_questions(&self, company: &str) -> Result<Vec<Question>> {
        let table = self.registry.table_name(company)?;
        let sql = format!(
            r#"SELECT id, question_text, difficulty, type FROM "{}""#,
            table
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let questions = stmt
            .query_map([], |row| Self::row_to_question(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(questions)
    }

    /// Overwrite the text, difficulty, and type of a persisted question.
    ///
    /// The question must carry a store-assigned id; updating an unknown id
    /// fails with [`Error::QuestionNotFound`] and leaves the table unchanged.
    pub fn update_question(&self, company: &str, question: &Question) -> Result<()> {
        let id = question.id.ok_or(Error::MissingId)?;
        if question.text.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }
        let table = self.registry.table_name(company)?;
        let sql = format!(
            r#"UPDATE "{}" SET question_text = ?1, difficulty = ?2, type = ?3 WHERE id = ?4"#,
            table
        );
        let rows_affected = self.conn.execute(
            &sql,
            params![
                question.text,
                question.difficulty.map(|d| d.as_str()),
                question.qtype.map(|t| t.as_str()),
                id,
            ],
        )?;
        if rows_affected == 0 {
            return Err(Error::QuestionNotFound {
                company: company.to_string(),
                id,
            });
        }
        Ok(())
    }

    /// Delete a question by id.
    ///
    /// Deleting an unknown id fails with [`Error::QuestionNotFound`].
    pub fn delete_question(&self, company: &str, id: i64) -> Result<()> {
        let table = self.registry.table_name(company)?;
        let sql = format!(r#"DELETE FROM "{}" WHERE id = ?1"#, table);
        let rows_affected = self.conn.execute(&sql, [id])?;
        if rows_affected == 0 {
            return Err(Error::QuestionNotFound {
                company: company.to_string(),
                id,
            });
        }
        Ok(())
    }

    /// Count the questions in one company's table
    pub fn count_questions(&self, company: &str) -> Result<usize> {
        let table = self.registry.table_name(company)?;
        let sql = format!(r#"SELECT COUNT(*) FROM "{}""#, table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Total question count across every registered company.
    ///
    /// Fails fast: a company whose table cannot be counted aborts the whole
    /// aggregation with an error naming that company, rather than returning
    /// a silent undercount.
    pub fn count_all(&self) -> Result<usize> {
        let mut total = 0;
        for company in self.registry.companies() {
            total += self.count_questions(company).map_err(|e| {
                tracing::error!("Counting questions for {} failed: {}", company, e);
                e
            })?;
        }
        Ok(total)
    }

    /// Per-company counts plus the grand total
    pub fn stats(&self) -> Result<StoreStats> {
        let mut companies = Vec::with_capacity(self.registry.len());
        let mut total = 0;
        for company in self.registry.companies() {
            let count = self.count_questions(company)?;
            total += count;
            companies.push(CompanyCount {
                company: company.to_string(),
                questions: count,
            });
        }
        Ok(StoreStats { companies, total })
    }

    /// Helper to convert a row to a Question.
    ///
    /// The store does not enforce the difficulty/type vocabularies, so NULL
    /// or unrecognized values map to unset fields; every row is listed.
    fn row_to_question(row: &rusqlite::Row) -> rusqlite::Result<Question> {
        let id: i64 = row.get(0)?;
        let text: String = row.get(1)?;
        let difficulty: Option<String> = row.get(2)?;
        let qtype: Option<String> = row.get(3)?;

        Ok(Question {
            id: Some(id),
            text,
            difficulty: difficulty.and_then(|s| s.parse().ok()),
            qtype: qtype.and_then(|s| s.parse().ok()),
        })
    }
}

/// Question count for a single company
#[derive(Debug, Clone)]
pub struct CompanyCount {
    pub company: String,
    pub questions: usize,
}

/// Store statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub companies: Vec<CompanyCount>,
    pub total: usize,
}

impl StoreStats {
    /// Companies that have at least one question
    pub fn non_empty(&self) -> impl Iterator<Item = &CompanyCount> {
        self.companies.iter().filter(|c| c.questions > 0)
    }
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        for company in self.non_empty() {
            writeln!(f, "  {}: {}", company.company, company.questions)?;
        }
        write!(f, "  Total: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Difficulty, QuestionType};

    fn test_registry() -> CompanyRegistry {
        CompanyRegistry::new(["Google", "Larsen & Toubro", "Zoho"]).unwrap()
    }

    fn test_store() -> QuestionStore {
        QuestionStore::open_in_memory(test_registry()).unwrap()
    }

    fn sample_question(text: &str) -> Question {
        Question::new(text, Difficulty::Medium, QuestionType::Technical)
    }

    #[test]
    fn test_add_then_list_roundtrip() {
        let store = test_store();

        store.add_question("Google", &sample_question("Explain hashing")).unwrap();

        let questions = store.list_questions("Google").unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert!(q.id.is_some());
        assert_eq!(q.text, "Explain hashing");
        assert_eq!(q.difficulty, Some(Difficulty::Medium));
        assert_eq!(q.qtype, Some(QuestionType::Technical));
    }

    #[test]
    fn test_ids_are_fresh_per_company() {
        let store = test_store();

        store.add_question("Google", &sample_question("one")).unwrap();
        store.add_question("Google", &sample_question("two")).unwrap();
        store.add_question("Google", &sample_question("three")).unwrap();

        let mut ids: Vec<i64> = store
            .list_questions("Google")
            .unwrap()
            .into_iter()
            .map(|q| q.id.unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_companies_are_isolated() {
        let store = test_store();

        store.add_question("Google", &sample_question("google q")).unwrap();
        store.add_question("Zoho", &sample_question("zoho q")).unwrap();

        let google = store.list_questions("Google").unwrap();
        let zoho = store.list_questions("Zoho").unwrap();
        assert_eq!(google.len(), 1);
        assert_eq!(zoho.len(), 1);
        assert_eq!(google[0].text, "google q");
        assert_eq!(zoho[0].text, "zoho q");
    }

    #[test]
    fn test_update_reflects_new_values() {
        let store = test_store();
        store.add_question("Google", &sample_question("Explain hashing")).unwrap();
        let id = store.list_questions("Google").unwrap()[0].id.unwrap();

        let updated = Question::with_id(
            id,
            "Explain hashing in depth",
            Difficulty::Hard,
            QuestionType::Technical,
        );
        store.update_question("Google", &updated).unwrap();

        let questions = store.list_questions("Google").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, Some(id));
        assert_eq!(questions[0].text, "Explain hashing in depth");
        assert_eq!(questions[0].difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn test_update_unknown_id_fails_and_preserves_table() {
        let store = test_store();
        store.add_question("Google", &sample_question("keep me")).unwrap();

        let ghost = Question::with_id(999, "ghost", Difficulty::Easy, QuestionType::Hr);
        let err = store.update_question("Google", &ghost).unwrap_err();
        assert!(matches!(err, Error::QuestionNotFound { id: 999, .. }));

        let questions = store.list_questions("Google").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "keep me");
    }

    #[test]
    fn test_update_without_id_fails() {
        let store = test_store();
        let unsaved = sample_question("never persisted");
        assert!(matches!(
            store.update_question("Google", &unsaved),
            Err(Error::MissingId)
        ));
    }

    #[test]
    fn test_delete_removes_only_that_id() {
        let store = test_store();
        store.add_question("Google", &sample_question("first")).unwrap();
        store.add_question("Google", &sample_question("second")).unwrap();

        let questions = store.list_questions("Google").unwrap();
        let first_id = questions[0].id.unwrap();

        store.delete_question("Google", first_id).unwrap();

        let remaining = store.list_questions("Google").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_ne!(remaining[0].id, Some(first_id));
    }

    #[test]
    fn test_delete_unknown_id_fails_and_preserves_table() {
        let store = test_store();
        store.add_question("Google", &sample_question("keep me")).unwrap();

        let err = store.delete_question("Google", 999).unwrap_err();
        assert!(matches!(err, Error::QuestionNotFound { id: 999, .. }));
        assert_eq!(store.list_questions("Google").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_text_rejected() {
        let store = test_store();
        let blank = sample_question("   ");
        assert!(matches!(
            store.add_question("Google", &blank),
            Err(Error::EmptyQuestion)
        ));

        store.add_question("Google", &sample_question("real")).unwrap();
        let id = store.list_questions("Google").unwrap()[0].id.unwrap();
        let mut cleared = Question::with_id(id, "", Difficulty::Easy, QuestionType::Hr);
        assert!(matches!(
            store.update_question("Google", &cleared),
            Err(Error::EmptyQuestion)
        ));
        cleared.text = "still real".to_string();
        store.update_question("Google", &cleared).unwrap();
    }

    #[test]
    fn test_unknown_company_rejected_everywhere() {
        let store = test_store();
        let q = sample_question("anything");
        assert!(matches!(
            store.add_question("Globex", &q),
            Err(Error::UnknownCompany(_))
        ));
        assert!(store.list_questions("Globex").is_err());
        assert!(store.delete_question("Globex", 1).is_err());
        assert!(store.count_questions("Globex").is_err());
    }

    #[test]
    fn test_count_all_matches_list_lengths() {
        let store = test_store();
        store.add_question("Google", &sample_question("a")).unwrap();
        store.add_question("Google", &sample_question("b")).unwrap();
        store.add_question("Larsen & Toubro", &sample_question("c")).unwrap();

        let companies: Vec<String> = store.registry().companies().map(str::to_string).collect();
        let expected: usize = companies
            .iter()
            .map(|c| store.list_questions(c).unwrap().len())
            .sum();

        assert_eq!(store.count_all().unwrap(), 3);
        assert_eq!(store.count_all().unwrap(), expected);
    }

    #[test]
    fn test_stats_partitions_counts() {
        let store = test_store();
        store.add_question("Google", &sample_question("a")).unwrap();
        store.add_question("Zoho", &sample_question("b")).unwrap();
        store.add_question("Zoho", &sample_question("c")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.companies.len(), 3);
        let zoho = stats.companies.iter().find(|c| c.company == "Zoho").unwrap();
        assert_eq!(zoho.questions, 2);
        assert_eq!(stats.non_empty().count(), 2);
    }

    #[test]
    fn test_rows_with_null_metadata_are_listed_and_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.db");
        let store = QuestionStore::open(&path, test_registry()).unwrap();
        store.add_question("Google", &sample_question("ours")).unwrap();

        // Rows written by other tools may skip the vocabularies entirely
        let external = Connection::open(&path).unwrap();
        external
            .execute(
                r#"INSERT INTO "Google" (question_text, difficulty, type) VALUES (?1, NULL, NULL)"#,
                ["theirs"],
            )
            .unwrap();
        external
            .execute(
                r#"INSERT INTO "Google" (question_text, difficulty, type) VALUES (?1, ?2, ?3)"#,
                ["odd one", "Brutal", "Trivia"],
            )
            .unwrap();

        let questions = store.list_questions("Google").unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(store.count_questions("Google").unwrap(), questions.len());

        let theirs = questions.iter().find(|q| q.text == "theirs").unwrap();
        assert_eq!(theirs.difficulty, None);
        assert_eq!(theirs.qtype, None);

        let odd = questions.iter().find(|q| q.text == "odd one").unwrap();
        assert_eq!(odd.difficulty, None);
        assert_eq!(odd.qtype, None);
    }

    #[test]
    fn test_count_all_fails_when_a_table_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.db");
        let store = QuestionStore::open(&path, test_registry()).unwrap();
        store.add_question("Google", &sample_question("still here")).unwrap();

        let external = Connection::open(&path).unwrap();
        external.execute(r#"DROP TABLE "Zoho""#, []).unwrap();

        assert!(matches!(store.count_all(), Err(Error::Storage(_))));
        assert!(store.stats().is_err());

        // The surviving tables are untouched
        assert_eq!(store.count_questions("Google").unwrap(), 1);
    }

    #[test]
    fn test_ensure_schema_idempotent_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.db");

        {
            let store = QuestionStore::open(&path, test_registry()).unwrap();
            store.add_question("Google", &sample_question("survives reopen")).unwrap();
            store.ensure_schema().unwrap();
        }

        let store = QuestionStore::open(&path, test_registry()).unwrap();
        let questions = store.list_questions("Google").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "survives reopen");
    }
}
