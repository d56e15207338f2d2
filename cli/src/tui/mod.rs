pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::runtime::Runtime;
use wordday_core::{AppPuzzleSession, SessionPhase};

use crate::tui::app::App;

pub fn run(runtime: &Runtime, session: AppPuzzleSession) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app, runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn load<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, runtime: &Runtime) -> io::Result<()> {
    app.reset_view();
    runtime.block_on(app.session.load());
    redraw(terminal, app)
}

fn redraw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    terminal
        .draw(|f| ui::draw(f, app))
        .map(|_| ())
        .map_err(|e| io::Error::other(e.to_string()))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, runtime: &Runtime) -> io::Result<()> {
    // Show the loading frame before the network call blocks.
    redraw(terminal, app)?;
    load(terminal, app, runtime)?;

    loop {
        app.tick();
        redraw(terminal, app)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let phase = app.session.phase().clone();
        match phase {
            SessionPhase::Playing | SessionPhase::Checking(_) => match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Left => app.previous(),
                KeyCode::Right => app.next(),
                KeyCode::Char(' ') => app.place_selected(),
                KeyCode::Backspace | KeyCode::Delete => app.delete_last(),
                KeyCode::Enter => app.submit(),
                KeyCode::Char('?') => app.toggle_help(),
                KeyCode::Char(c) => app.place_char(c),
                _ => {}
            },
            SessionPhase::Error(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => {
                    tracing::info!("retrying word of the day load");
                    load(terminal, app, runtime)?
                }
                _ => {}
            },
            SessionPhase::Solved | SessionPhase::Loading => match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => return Ok(()),
                _ => {}
            },
        }
    }
}
