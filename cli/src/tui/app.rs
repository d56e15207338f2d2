use std::time::{Duration, Instant};

use wordday_core::AppPuzzleSession;

pub struct App {
    pub session: AppPuzzleSession,
    /// Cursor over the letter tiles.
    pub selected: usize,
    pending_check: Option<(Instant, Duration)>,
}

impl App {
    pub fn new(session: AppPuzzleSession) -> App {
        App {
            session,
            selected: 0,
            pending_check: None,
        }
    }

    /// Called after a (re)load so the cursor and timer match the new board.
    pub fn reset_view(&mut self) {
        self.selected = 0;
        self.pending_check = None;
    }

    pub fn next(&mut self) {
        let len = self.session.board().tiles().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected >= len - 1 { 0 } else { self.selected + 1 };
    }

    pub fn previous(&mut self) {
        let len = self.session.board().tiles().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }

    pub fn place_selected(&mut self) {
        if let Some(tile) = self.session.board().tiles().get(self.selected) {
            let id = tile.id;
            self.session.place_letter(id);
        }
    }

    /// Places the first unused tile showing `value`, so letters can be typed directly.
    pub fn place_char(&mut self, value: char) {
        if let Some(id) = self.session.board().find_unused(value) {
            self.session.place_letter(id);
        }
    }

    pub fn delete_last(&mut self) {
        self.session.delete_last_letter();
    }

    pub fn toggle_help(&mut self) {
        self.session.toggle_help();
    }

    pub fn submit(&mut self) {
        if let Some(result) = self.session.begin_check() {
            self.pending_check = Some((Instant::now(), self.session.delay_for(result)));
        }
    }

    /// Completes a check once its feedback delay has elapsed.
    pub fn tick(&mut self) {
        if let Some((started, delay)) = self.pending_check {
            if started.elapsed() >= delay {
                self.session.finish_check();
                self.pending_check = None;
                let len = self.session.board().tiles().len();
                if self.selected >= len {
                    self.selected = 0;
                }
            }
        }
    }
}
