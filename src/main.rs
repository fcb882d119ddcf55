use std::path::{Path, PathBuf};

use clap::Parser;

use chapquiz::bank::QuestionBank;
use chapquiz::cli::Cli;
use chapquiz::error::QuizError;
use chapquiz::results::{self, ResultsStore};
use chapquiz::state::AppState;
use chapquiz::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuizError> {
    let cli = Cli::parse();

    let bank = QuestionBank::load(Path::new(&cli.questions))?;

    let results_path = cli
        .results
        .map(PathBuf::from)
        .unwrap_or_else(results::default_results_path);
    let store = ResultsStore::new(results_path);

    if cli.history {
        print_history(&store, cli.user.as_deref())?;
        return Ok(());
    }

    let state = AppState::new(bank, store);
    tui::run_tui(state)?;

    Ok(())
}

fn print_history(store: &ResultsStore, user: Option<&str>) -> Result<(), QuizError> {
    let records = match user {
        Some(user) => store.list_for_user(user)?,
        None => store.list_all()?,
    };

    if records.is_empty() {
        println!("No results recorded.");
        return Ok(());
    }

    println!(
        "{:<19}  {:<24}  {:>7}  {:>6}  Chapters",
        "Date", "User", "Score", "Pct"
    );
    for r in &records {
        println!(
            "{:<19}  {:<24}  {:>3}/{:<3}  {:>5.1}%  {}",
            r.timestamp,
            r.user,
            r.score,
            r.answered,
            r.pct,
            r.chapters.join(", ")
        );
    }
    Ok(())
}
