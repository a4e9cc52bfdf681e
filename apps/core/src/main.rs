// TaskSense CLI Entry Point
// Runs the task text heuristics from the command line and prints JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use tasksense_core::analysis::{Category, Priority, TaskAnalyzer};
use tasksense_core::config::AppConfig;
use tasksense_core::logging;
use tasksense_core::models::NewTask;

#[derive(Parser)]
#[command(name = "tasksense", version, about = "Heuristic task tagging and suggestions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Categorize, prioritize and score a task text.
    Analyze {
        /// Task text (multiple words are joined with spaces).
        #[arg(required = true)]
        text: Vec<String>,

        /// Also print category scores and matched sentiment words.
        #[arg(long)]
        explain: bool,
    },

    /// Print the full sentiment breakdown of a text.
    Sentiment {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Suggest a follow-up task from existing task titles.
    Suggest {
        /// Existing task titles.
        titles: Vec<String>,

        /// File with one existing title per line.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Seed for the random fallback, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Resolve the attributes of a new task as it would be stored.
    Enrich {
        /// Task title.
        title: String,

        /// Explicit category (work, personal, shopping, other).
        #[arg(long)]
        category: Option<Category>,

        /// Explicit priority (high, medium, low).
        #[arg(long)]
        priority: Option<Priority>,
    },
}

#[derive(Serialize)]
struct SuggestionResponse {
    suggestion: String,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_titles(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read titles from {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    logging::init_tracing(&config)?;
    info!(log_format = ?config.log_format, "TaskSense starting");

    let analyzer = TaskAnalyzer::from_config(&config);

    match cli.command {
        Commands::Analyze { text, explain } => {
            let text = text.join(" ");
            if explain {
                print_json(&analyzer.explain(&text))?;
            } else {
                print_json(&analyzer.analyze(&text))?;
            }
        }
        Commands::Sentiment { text } => {
            print_json(&analyzer.score_sentiment(&text.join(" ")))?;
        }
        Commands::Suggest {
            mut titles,
            file,
            seed,
        } => {
            if let Some(path) = file {
                titles.extend(read_titles(&path)?);
            }
            let suggestion = match seed {
                Some(seed) => analyzer.suggest_with_rng(&titles, &mut StdRng::seed_from_u64(seed)),
                None => analyzer.suggest(&titles),
            };
            info!(kind = ?suggestion.kind, "suggestion generated");
            print_json(&SuggestionResponse {
                suggestion: suggestion.text,
            })?;
        }
        Commands::Enrich {
            title,
            category,
            priority,
        } => {
            let mut task = NewTask::titled(title);
            task.category = category;
            task.priority = priority;
            print_json(&analyzer.enrich_new_task(task)?)?;
        }
    }

    Ok(())
}
