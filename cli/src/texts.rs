// Every user-facing string of the binary.

pub const APP_TITLE: &str = "WORD OF THE DAY";
pub const LOADING: &str = "Loading…";
pub const LOAD_ERROR: &str = "Could not load the word of the day. Check your connection and try again.";
pub const RETRY: &str = "r: Retry";
pub const TRANSLATION: &str = "Translation:";
pub const CORRECT: &str = "Correct!";
pub const WRONG: &str = "Not quite, try again.";
pub const SOLVED_TODAY: &str = "Solved today";
pub const UNSOLVED_TODAY: &str = "Unscramble today's word";
pub const LETTERS: &str = "Letters";
pub const ALREADY_SOLVED: &str = "Today's word is already solved.";
pub const LETTERS_MISMATCH: &str = "Those letters are not in today's puzzle.";
pub const WRONG_LENGTH: &str = "The answer must use every letter exactly once.";
pub const NO_HISTORY: &str = "No solved days yet.";
pub const TOTAL_SOLVED: &str = "Total solved";
pub const CURRENT_STREAK: &str = "Current streak";
pub const TRIAL_NOT_STARTED: &str = "Training trial has not started.";
pub const TRIAL_ACTIVE: &str = "Training trial active, days left:";
pub const TRIAL_EXPIRED: &str = "Training trial has ended.";
pub const UNLOCKED: &str = "Training unlocked.";
pub const FOOTER_PLAYING: &str = "←/→: Select | Space: Place | type: Place letter | Backspace: Delete | ?: Help | Enter: OK | Esc: Quit";
pub const FOOTER_DONE: &str = "q: Quit";
