mod history;
mod logging;
mod texts;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;
use wordday_core::{
    open_service, open_session, AccessGate, FileKeyValueStore, SessionPhase, TrainingAccess,
    WordDayConfig,
};

#[derive(Parser)]
#[command(name = "wordday")]
#[command(about = "Greek word of the day puzzle", long_about = None)]
struct Cli {
    /// Directory for the word cache, solved history and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play today's puzzle in the terminal UI
    Play,
    /// Show today's puzzle state
    Today,
    /// Submit an answer for today's puzzle
    Solve {
        answer: String,
    },
    /// Show solved days and the current streak
    Stats,
    /// Show or start the training trial
    Trial {
        /// Start the trial if it has not started yet
        #[arg(long)]
        start: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WordDayConfig::from_env()?.with_data_dir(cli.data_dir);
    let interactive = matches!(cli.command, None | Some(Commands::Play));
    let _log_guard = logging::init_tracing(&cli.log_level, &config.log_dir(), !interactive);
    tracing::debug!(data_dir = %config.data_dir.display(), url = %config.word_list_url, "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Commands::Today) => show_today(&runtime, &config)?,
        Some(Commands::Solve { answer }) => solve(&runtime, &config, &answer)?,
        Some(Commands::Stats) => {
            let service = open_service(&config)?;
            history::show_history(&service.solved_history(), service.compute_stats());
        }
        Some(Commands::Trial { start }) => trial(&config, start)?,
        Some(Commands::Play) | None => {
            tui::run(&runtime, open_session(&config)?)?;
        }
    }
    Ok(())
}

fn show_today(runtime: &Runtime, config: &WordDayConfig) -> Result<()> {
    let mut session = open_session(config)?;
    runtime.block_on(session.load());

    match (session.phase(), session.word()) {
        (SessionPhase::Solved, Some(word)) => {
            println!("{}: {} ({})", texts::SOLVED_TODAY, word.greek_full(), word.english());
        }
        (SessionPhase::Playing, Some(_)) => {
            let letters: Vec<String> = session
                .board()
                .tiles()
                .iter()
                .map(|t| t.value.to_string())
                .collect();
            println!("{}", texts::UNSOLVED_TODAY);
            println!("  {}: {}", texts::LETTERS, letters.join(" "));
            println!("  {}", "_ ".repeat(session.board().slots().len()).trim_end());
        }
        _ => println!("{}", texts::LOAD_ERROR),
    }
    Ok(())
}

fn solve(runtime: &Runtime, config: &WordDayConfig, answer: &str) -> Result<()> {
    let mut session = open_session(config)?;
    runtime.block_on(session.load());

    match session.phase() {
        SessionPhase::Playing => {}
        SessionPhase::Solved => {
            println!("{}", texts::ALREADY_SOLVED);
            return Ok(());
        }
        _ => {
            println!("{}", texts::LOAD_ERROR);
            return Ok(());
        }
    }

    for value in answer.trim().chars() {
        match session.board().find_unused(value) {
            Some(id) => session.place_letter(id),
            None => {
                println!("{}", texts::LETTERS_MISMATCH);
                return Ok(());
            }
        }
    }
    if !session.is_ok_enabled() {
        println!("{}", texts::WRONG_LENGTH);
        return Ok(());
    }

    match runtime.block_on(session.check_answer()) {
        Some(wordday_core::CheckResult::Success) => {
            println!("{}", texts::CORRECT);
            if let Some(word) = session.word() {
                println!("  {} ({})", word.greek_full(), word.english());
            }
        }
        Some(wordday_core::CheckResult::Failure) => println!("{}", texts::WRONG),
        None => println!("{}", texts::WRONG_LENGTH),
    }
    Ok(())
}

fn trial(config: &WordDayConfig, start: bool) -> Result<()> {
    let store = FileKeyValueStore::new(Some(config.data_dir.clone()))?;
    let access = TrainingAccess::new(store, config.trial_days);
    if start {
        access.start_trial_if_needed()?;
    }

    let state = access.state();
    match (state.has_access, state.in_trial, state.days_left) {
        (true, false, _) => println!("{}", texts::UNLOCKED),
        (true, true, Some(days)) => println!("{} {}", texts::TRIAL_ACTIVE, days),
        (false, _, Some(_)) => println!("{}", texts::TRIAL_EXPIRED),
        _ => println!("{}", texts::TRIAL_NOT_STARTED),
    }
    Ok(())
}
