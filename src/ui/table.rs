use crate::question::Question;
use crate::storage::StoreStats;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct QuestionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Question")]
    text: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Type")]
    qtype: String,
}

/// Render a company's questions as a terminal table
pub fn questions_table(questions: &[Question]) -> String {
    if questions.is_empty() {
        return String::new();
    }

    let rows: Vec<QuestionRow> = questions
        .iter()
        .map(|q| QuestionRow {
            id: q.id.map(|id| id.to_string()).unwrap_or_default(),
            text: q.text.clone(),
            difficulty: q.difficulty_label().to_string(),
            qtype: q.qtype_label().to_string(),
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Questions")]
    questions: String,
}

/// Render per-company counts; companies with no questions are skipped
pub fn stats_table(stats: &StoreStats) -> String {
    let mut rows: Vec<StatsRow> = stats
        .non_empty()
        .map(|c| StatsRow {
            company: c.company.clone(),
            questions: c.questions.to_string(),
        })
        .collect();

    rows.push(StatsRow {
        company: "Total".to_string(),
        questions: stats.total.to_string(),
    });

    Table::new(&rows).with(Style::rounded()).to_string()
}
