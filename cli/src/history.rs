use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use wordday_core::{PuzzleStats, SolvedHistory};

use crate::texts;

#[derive(Tabled)]
struct SolvedRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Word")]
    word: String,
    #[tabled(rename = "Translation")]
    translation: String,
}

pub fn show_history(history: &SolvedHistory, stats: PuzzleStats) {
    println!("\x1b[1;36m{}\x1b[0m: {}", texts::TOTAL_SOLVED, stats.total_solved);
    println!("\x1b[1;36m{}\x1b[0m: {}", texts::CURRENT_STREAK, stats.current_streak);

    if history.is_empty() {
        println!("{}", texts::NO_HISTORY);
        return;
    }

    // Most recent first
    let rows: Vec<SolvedRow> = history
        .records()
        .iter()
        .rev()
        .map(|record| {
            let day = record.local_day();
            SolvedRow {
                date: format!("{} ({})", day.format("%Y-%m-%d"), day.format("%a")),
                word: record.word.greek_full().to_string(),
                translation: record.word.english().to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}
