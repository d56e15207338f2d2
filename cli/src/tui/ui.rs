use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use wordday_core::{CheckResult, SessionPhase, VocabularyEntry};

use crate::texts;
use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(texts::APP_TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let footer_text = match app.session.phase() {
        SessionPhase::Playing | SessionPhase::Checking(_) => texts::FOOTER_PLAYING,
        SessionPhase::Error(_) => texts::RETRY,
        _ => texts::FOOTER_DONE,
    };

    match app.session.phase() {
        SessionPhase::Loading => draw_message(f, texts::LOADING, Color::DarkGray, main_chunks[1]),
        SessionPhase::Error(_) => draw_message(f, texts::LOAD_ERROR, Color::Red, main_chunks[1]),
        SessionPhase::Solved => {
            if let Some(word) = app.session.word() {
                draw_solved(f, word, main_chunks[1]);
            }
        }
        SessionPhase::Playing | SessionPhase::Checking(_) => draw_game(f, app, main_chunks[1]),
    }

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_message(f: &mut Frame, message: &str, color: Color, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(paragraph, area);
}

fn draw_solved(f: &mut Frame, word: &VocabularyEntry, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            word.greek_full(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(word.english(), Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", texts::SOLVED_TODAY))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn draw_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Slots
            Constraint::Length(3), // Translation
            Constraint::Length(3), // Letters
            Constraint::Length(1), // Result
            Constraint::Min(0),
        ])
        .split(area);

    let result = app.session.result();
    let stroke = match result {
        Some(CheckResult::Success) => Color::Green,
        Some(CheckResult::Failure) => Color::Red,
        None => Color::DarkGray,
    };

    let slots: Vec<Span> = app
        .session
        .board()
        .slots()
        .iter()
        .map(|slot| {
            let label = slot.map(|c| c.to_string()).unwrap_or_else(|| "_".to_string());
            Span::styled(format!(" {} ", label), Style::default().add_modifier(Modifier::BOLD))
        })
        .collect();
    let slots_block = Paragraph::new(Line::from(slots))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(stroke)),
        );
    f.render_widget(slots_block, chunks[0]);

    if app.session.show_help() {
        if let Some(word) = app.session.word() {
            let help = Paragraph::new(Line::from(vec![
                Span::styled(texts::TRANSLATION, Style::default().fg(Color::Blue)),
                Span::raw(" "),
                Span::raw(word.english()),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(help, chunks[1]);
        }
    }

    let letters: Vec<Span> = app
        .session
        .board()
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            let mut style = Style::default();
            if tile.used {
                style = style.fg(Color::DarkGray);
            }
            if i == app.selected && !app.session.is_checking() {
                style = style.bg(Color::DarkGray).fg(Color::White).add_modifier(Modifier::BOLD);
            }
            Span::styled(format!(" {} ", tile.value), style)
        })
        .collect();
    let letters_block = Paragraph::new(Line::from(letters))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", texts::LETTERS))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(letters_block, chunks[2]);

    if let Some(result) = result {
        let (message, color) = match result {
            CheckResult::Success => (texts::CORRECT, Color::Green),
            CheckResult::Failure => (texts::WRONG, Color::Red),
        };
        let line = Paragraph::new(message)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(line, chunks[3]);
    }
}
