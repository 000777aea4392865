//! TUI application state and logic
//!
//! The UI collaborator: owns the engine and the persistence store, maps key
//! presses to engine operations, and reacts to the resulting state. The engine
//! itself never touches the store; every save/clear decision lives here.

use crate::engine::{GameEngine, MAX_ATTEMPTS, Status};
use crate::persistence::{GameStore, KeyValueStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// End-of-game dialog offering the two player choices (play again / quit)
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Application state
pub struct App<S: KeyValueStore> {
    pub engine: GameEngine<StdRng>,
    pub store: GameStore<S>,
    pub alert: Option<Alert>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create the app, resuming a saved game unless `new_game` is set
    ///
    /// A missing or unusable save silently falls back to a fresh game.
    ///
    /// # Errors
    ///
    /// Returns an error if no game can be started (empty word pool).
    pub fn new(
        mut engine: GameEngine<StdRng>,
        mut store: GameStore<S>,
        new_game: bool,
    ) -> Result<Self> {
        let mut notice = None;

        let resumed = !new_game
            && store
                .load()
                .is_some_and(|saved| engine.restore(&saved));
        if resumed {
            notice = Some("Resumed saved game".to_string());
        } else {
            // Starting fresh abandons whatever save was there
            if let Err(err) = store.clear() {
                log::warn!("Could not clear saved game: {err}");
            }
            engine.start_new_game()?;
        }

        Ok(Self {
            engine,
            store,
            alert: None,
            notice,
            should_quit: false,
        })
    }

    /// Type one letter into the active row
    pub fn input_letter(&mut self, letter: char) {
        self.engine.input_letter(letter);
    }

    /// Delete the last typed letter
    pub fn delete_letter(&mut self) {
        self.engine.delete_letter();
    }

    /// Submit the active row and react to the outcome
    ///
    /// A non-terminal submission saves the game; a terminal one clears the
    /// save and raises the end-of-game alert.
    pub fn submit_guess(&mut self) {
        let before = self.engine.attempts().len();
        self.engine.submit_guess();
        if self.engine.attempts().len() == before {
            return; // gated no-op, nothing changed
        }

        match self.engine.status() {
            Status::Won => {
                self.clear_save();
                let turns = self.engine.attempts().len();
                self.alert = Some(Alert {
                    title: "You won!".to_string(),
                    message: format!("Guessed in {turns}/{MAX_ATTEMPTS} attempts."),
                });
            }
            Status::Lost => {
                self.clear_save();
                let answer = self
                    .engine
                    .revealed_answer()
                    .unwrap_or_default()
                    .to_uppercase();
                self.alert = Some(Alert {
                    title: "Game over".to_string(),
                    message: format!("Out of attempts - the word was {answer}."),
                });
            }
            _ => self.save_progress(),
        }
    }

    /// Dismiss the end-of-game alert into a fresh game
    pub fn play_again(&mut self) {
        self.alert = None;
        self.notice = None;
        if let Err(err) = self.engine.start_new_game() {
            self.notice = Some(err.to_string());
            self.should_quit = true;
        }
    }

    /// Abandon the current game and start over
    pub fn restart(&mut self) {
        self.engine.abandon();
        self.clear_save();
        self.play_again();
    }

    /// Host-lifecycle hook: persist the running game, then quit
    pub fn suspend_and_quit(&mut self) {
        self.save_progress();
        self.should_quit = true;
    }

    fn save_progress(&mut self) {
        if let Some(saved) = self.engine.snapshot()
            && let Err(err) = self.store.save(&saved)
        {
            log::warn!("Could not save game: {err}");
            self.notice = Some("Warning: progress could not be saved".to_string());
        }
    }

    fn clear_save(&mut self) {
        if let Err(err) = self.store.clear() {
            log::warn!("Could not clear saved game: {err}");
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.alert.is_some() {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.play_again();
                    }
                    _ => {
                        // Alert stays up until the player picks a choice
                    }
                }
            } else {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.suspend_and_quit();
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.restart();
                    }
                    KeyCode::Esc => {
                        app.suspend_and_quit();
                    }
                    KeyCode::Char(c) => {
                        app.input_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.delete_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::persistence::MemoryStore;
    use rand::SeedableRng;

    fn app() -> App<MemoryStore> {
        let words = vec![Word::new("apple").unwrap()];
        let engine = GameEngine::with_rng(words, StdRng::seed_from_u64(1));
        App::new(engine, GameStore::new(MemoryStore::new()), true).unwrap()
    }

    fn submit(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            app.input_letter(c);
        }
        app.submit_guess();
    }

    #[test]
    fn new_game_fails_without_words() {
        let engine = GameEngine::with_rng(Vec::new(), StdRng::seed_from_u64(1));
        assert!(App::new(engine, GameStore::new(MemoryStore::new()), true).is_err());
    }

    #[test]
    fn non_terminal_submission_saves_progress() {
        let mut app = app();
        submit(&mut app, "arise");

        let saved = app.store.load().unwrap();
        assert_eq!(saved.attempts, vec!["arise".to_string()]);
        assert_eq!(saved.attempt_count, 1);
        assert!(app.alert.is_none());
    }

    #[test]
    fn rejected_submission_saves_nothing() {
        let mut app = app();
        for c in "ar".chars() {
            app.input_letter(c);
        }
        app.submit_guess();

        assert_eq!(app.store.load(), None);
    }

    #[test]
    fn win_clears_save_and_raises_alert() {
        let mut app = app();
        submit(&mut app, "arise");
        submit(&mut app, "apple");

        assert_eq!(app.engine.status(), Status::Won);
        assert_eq!(app.store.load(), None);
        assert_eq!(app.alert.as_ref().unwrap().title, "You won!");
    }

    #[test]
    fn loss_clears_save_and_reveals_answer() {
        let mut app = app();
        for _ in 0..6 {
            submit(&mut app, "crane");
        }

        assert_eq!(app.engine.status(), Status::Lost);
        assert_eq!(app.store.load(), None);
        let alert = app.alert.as_ref().unwrap();
        assert_eq!(alert.title, "Game over");
        assert!(alert.message.contains("APPLE"));
    }

    #[test]
    fn play_again_starts_fresh() {
        let mut app = app();
        submit(&mut app, "arise");
        submit(&mut app, "apple");

        app.play_again();
        assert!(app.alert.is_none());
        assert_eq!(app.engine.status(), Status::InProgress);
        assert!(app.engine.attempts().is_empty());
    }

    #[test]
    fn suspend_saves_partial_row() {
        let mut app = app();
        submit(&mut app, "arise");
        app.input_letter('p');
        app.suspend_and_quit();

        assert!(app.should_quit);
        let saved = app.store.load().unwrap();
        assert_eq!(saved.attempts, vec!["arise".to_string(), "p".to_string()]);
    }

    #[test]
    fn restart_abandons_and_clears_save() {
        let mut app = app();
        submit(&mut app, "arise");
        app.restart();

        assert_eq!(app.store.load(), None);
        assert_eq!(app.engine.status(), Status::InProgress);
        assert!(app.engine.attempts().is_empty());
    }

    #[test]
    fn resume_restores_saved_game() {
        let mut first = app();
        submit(&mut first, "arise");
        let store_contents = first.store.load().unwrap();

        let mut store = GameStore::new(MemoryStore::new());
        store.save(&store_contents).unwrap();
        let words = vec![Word::new("apple").unwrap()];
        let engine = GameEngine::with_rng(words, StdRng::seed_from_u64(9));
        let resumed = App::new(engine, store, false).unwrap();

        assert_eq!(resumed.engine.attempt_count(), 1);
        assert_eq!(resumed.notice.as_deref(), Some("Resumed saved game"));
    }

    #[test]
    fn new_flag_ignores_saved_game() {
        let mut store = GameStore::new(MemoryStore::new());
        store
            .save(&crate::persistence::SavedGame {
                target_word: "apple".to_string(),
                attempts: vec!["arise".to_string()],
                attempt_count: 1,
                active_row: 1,
            })
            .unwrap();

        let words = vec![Word::new("apple").unwrap()];
        let engine = GameEngine::with_rng(words, StdRng::seed_from_u64(9));
        let fresh = App::new(engine, store, true).unwrap();

        assert!(fresh.engine.attempts().is_empty());
        assert_eq!(fresh.store.load(), None); // stale save abandoned

    }
}
