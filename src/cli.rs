use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chapquiz", version, about = "Terminal-based chapter quiz")]
pub struct Cli {
    /// Path to the question bank file [default: questions.json]
    #[arg(default_value = "questions.json")]
    pub questions: String,

    /// Results history file [default: platform data dir]
    #[arg(long, value_name = "path")]
    pub results: Option<String>,

    /// Print recorded results without entering the TUI
    #[arg(long)]
    pub history: bool,

    /// With --history, only show results for this user
    #[arg(long, value_name = "email")]
    pub user: Option<String>,
}
