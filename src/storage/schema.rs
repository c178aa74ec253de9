//! Database schema definitions

/// SQL template for a per-company question table.
///
/// `difficulty` and `type` are nullable short strings by design: the closed
/// vocabularies are enforced by the entity model, not the store, so the
/// schema stays compatible with rows written by earlier tools.
const CREATE_QUESTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "{table}" (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL,
    difficulty TEXT,
    type TEXT
)
"#;

/// SQL to create the table for one company.
///
/// `table` must be a registry-validated table name; this is the only place
/// a table name enters a DDL statement.
pub fn create_table_sql(table: &str) -> String {
    CREATE_QUESTIONS_TABLE.replace("{table}", table)
}
