//! Qbank CLI - Command-line interface for the interview question bank

use clap::{Parser, Subcommand};
use qbank::company::CompanyRegistry;
use qbank::config::{self, QbankConfig};
use qbank::question::{Difficulty, Question, QuestionType};
use qbank::storage::QuestionStore;
use qbank::ui;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "qbank")]
#[command(version = "0.1.0")]
#[command(about = "Interview question bank - track questions per company")]
#[command(long_about = r#"
Qbank keeps a local bank of interview questions, one table per company:
  • Record questions with a difficulty and a type
  • Review, rephrase, or drop questions per company
  • See how many questions you have banked overall

Example usage:
  qbank init
  qbank add --company Google --text "Explain hashing" --difficulty medium --type technical
  qbank list --company Google
  qbank stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to qbank.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file and create the database with all company tables
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// List the registered companies and their table names
    Companies,

    /// Add a question to a company's bank
    Add {
        /// Company the question was asked at
        #[arg(short, long)]
        company: String,

        /// The question text
        #[arg(short, long)]
        text: String,

        /// Difficulty: easy, medium, hard, expert
        #[arg(short, long)]
        difficulty: String,

        /// Type: technical, hr, behavioral, situational
        #[arg(short = 'T', long = "type")]
        qtype: String,
    },

    /// List all questions recorded for a company
    List {
        /// Company to list questions for
        #[arg(short, long)]
        company: String,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Overwrite the text, difficulty, and type of a question
    Update {
        /// Company the question belongs to
        #[arg(short, long)]
        company: String,

        /// Id of the question to update
        #[arg(short, long)]
        id: i64,

        /// The new question text
        #[arg(short, long)]
        text: String,

        /// Difficulty: easy, medium, hard, expert
        #[arg(short, long)]
        difficulty: String,

        /// Type: technical, hr, behavioral, situational
        #[arg(short = 'T', long = "type")]
        qtype: String,
    },

    /// Delete a question by id
    Delete {
        /// Company the question belongs to
        #[arg(short, long)]
        company: String,

        /// Id of the question to delete
        #[arg(short, long)]
        id: i64,
    },

    /// Show per-company question counts and the grand total
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Init { database, force } => {
            let config_path = cli.config.unwrap_or_else(config::default_config_path);
            let db_path = database
                .or_else(|| config.database.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| config::default_database_path_in(std::path::Path::new(".")));

            let new_config = QbankConfig {
                database: Some(db_path.display().to_string()),
                companies: config.companies.clone(),
            };
            config::write_config(&config_path, &new_config, force)?;

            config::ensure_db_dir(&db_path)?;
            let registry = build_registry(&config)?;
            let store = QuestionStore::open(&db_path, registry)?;

            ui::info("Config", &config_path.display().to_string());
            ui::info("Database", &db_path.display().to_string());
            ui::success(&format!(
                "Created tables for {} companies",
                store.registry().len()
            ));
        }

        Commands::Companies => {
            let registry = build_registry(&config)?;
            ui::section("Registered companies");
            for company in registry.companies() {
                println!("  {} ({})", company, registry.table_name(company)?);
            }
        }

        Commands::Add { company, text, difficulty, qtype } => {
            let store = open_store(&config)?;
            let question = Question::new(
                text,
                Difficulty::from_str(&difficulty)?,
                QuestionType::from_str(&qtype)?,
            );

            match store.add_question(&company, &question) {
                Ok(()) => ui::success(&format!("Added question for {}", company)),
                Err(e) => {
                    ui::error(&format!("Could not add question: {}", e));
                    std::process::exit(1);
                }
            }
        }

        Commands::List { company, json } => {
            let store = open_store(&config)?;
            let questions = match store.list_questions(&company) {
                Ok(questions) => questions,
                Err(e) => {
                    ui::error(&format!("Could not list questions: {}", e));
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else if questions.is_empty() {
                println!("No questions recorded for {} yet.", company);
            } else {
                ui::section(&format!("{} ({} questions)", company, questions.len()));
                println!("{}", ui::questions_table(&questions));
            }
        }

        Commands::Update { company, id, text, difficulty, qtype } => {
            let store = open_store(&config)?;
            let question = Question::with_id(
                id,
                text,
                Difficulty::from_str(&difficulty)?,
                QuestionType::from_str(&qtype)?,
            );

            match store.update_question(&company, &question) {
                Ok(()) => ui::success(&format!("Updated question {} for {}", id, company)),
                Err(e) => {
                    ui::error(&format!("Could not update question: {}", e));
                    std::process::exit(1);
                }
            }
        }

        Commands::Delete { company, id } => {
            let store = open_store(&config)?;
            match store.delete_question(&company, id) {
                Ok(()) => ui::success(&format!("Deleted question {} for {}", id, company)),
                Err(e) => {
                    ui::error(&format!("Could not delete question: {}", e));
                    std::process::exit(1);
                }
            }
        }

        Commands::Stats => {
            let store = open_store(&config)?;
            match store.stats() {
                Ok(stats) => {
                    ui::section("Question bank");
                    println!("{}", ui::stats_table(&stats));
                }
                Err(e) => {
                    ui::error(&format!("Could not count questions: {}", e));
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn build_registry(config: &QbankConfig) -> anyhow::Result<CompanyRegistry> {
    let registry = match &config.companies {
        Some(companies) => CompanyRegistry::new(companies.iter().cloned())?,
        None => CompanyRegistry::with_defaults()?,
    };
    Ok(registry)
}

fn open_store(config: &QbankConfig) -> anyhow::Result<QuestionStore> {
    let db_path = config
        .database
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config::default_database_path_in(std::path::Path::new(".")));

    config::ensure_db_dir(&db_path)?;
    let registry = build_registry(config)?;
    tracing::debug!("Opening question store at {:?}", db_path);
    Ok(QuestionStore::open(&db_path, registry)?)
}
