//! TUI application state and logic

use crate::core::Letter;
use crate::engine::config::MAX_GUESSES;
use crate::engine::{Event, GameState, GameStatus, GuessError, PowerUp, Transition};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key when no signal is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<D> {
    pub game: GameState<D>,
    pub show_answer: bool,
    pub stats: Statistics,
    pub notice: Option<String>,
    pub should_quit: bool,
}

/// Results of the games played this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=6
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    fn record(&mut self, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if attempts <= MAX_GUESSES {
                    self.guess_distribution[attempts] += 1;
                }
            }
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Playing => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(game: GameState<D>, show_answer: bool) -> Self {
        Self {
            game,
            show_answer,
            stats: Statistics::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// Map a key press to a game event for the current screen
    pub fn event_for_key(&mut self, key: KeyEvent) -> Option<Event> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.game.status() != GameStatus::Playing {
            return match key.code {
                KeyCode::Char('n') | KeyCode::Enter => Some(Event::Reset),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            };
        }

        if self.game.power_up_picker_open() {
            return match key.code {
                KeyCode::Char('1') => Some(Event::ChoosePowerUp(PowerUp::RevealAndLock)),
                KeyCode::Char('2') => Some(Event::ChoosePowerUp(PowerUp::HintTwo)),
                KeyCode::Char('3') => Some(Event::ChoosePowerUp(PowerUp::ClearHalf)),
                KeyCode::Esc | KeyCode::Tab => Some(Event::ClosePowerUps),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Letter::from_char(c).map(Event::Letter),
            KeyCode::Backspace => Some(Event::Delete),
            KeyCode::Enter => Some(Event::Submit),
            KeyCode::Tab => Some(Event::OpenPowerUps),
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(event) = self.event_for_key(key) {
            let transition = self.game.apply(event);
            self.after(&transition);
        }
    }

    fn after(&mut self, transition: &Transition) {
        match transition {
            Transition::Rejected(GuessError::InvalidLength(_)) => {
                self.notice = Some("Not enough letters".to_string());
            }
            Transition::Rejected(GuessError::NotInDictionary(_)) => {
                self.notice = Some("Not in word list".to_string());
            }
            Transition::Accepted { status, .. } => {
                self.stats.record(*status, self.game.attempts());
                self.notice = None;
            }
            Transition::Ignored => {}
            _ => self.notice = None,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up in time to clear the next shake or toast
        let timeout = app
            .game
            .signals()
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            })
            .min(IDLE_POLL);

        if event::poll(timeout)?
            && let TermEvent::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.game.expire_signals(Instant::now());

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
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn new_app() -> App<WordList> {
        let dictionary = WordList::new(
            words_from_slice(&["crane", "slate", "pious", "balmy", "theft", "grand"]),
            &[],
        );
        App::new(
            GameState::with_solution(dictionary, Word::new("crane").unwrap()),
            false,
        )
    }

    fn press(app: &mut App<WordList>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn enter_word(app: &mut App<WordList>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submit_a_guess() {
        let mut app = new_app();
        enter_word(&mut app, "slate");

        assert_eq!(app.game.current_row(), 1);
        assert!(app.game.rows()[0].is_some());
    }

    #[test]
    fn rejection_sets_notice_and_editing_clears_it() {
        let mut app = new_app();
        enter_word(&mut app, "cr");
        assert_eq!(app.notice.as_deref(), Some("Not enough letters"));
        assert!(app.game.shake_active());

        press(&mut app, KeyCode::Backspace);
        assert!(app.notice.is_none());
    }

    #[test]
    fn tab_opens_picker_and_digits_choose() {
        let mut app = new_app();
        for word in ["pious", "balmy", "theft"] {
            enter_word(&mut app, word);
        }

        press(&mut app, KeyCode::Tab);
        assert!(app.game.power_up_picker_open());

        // Letters do nothing while the picker is up
        press(&mut app, KeyCode::Char('c'));
        assert!(app.game.editor().is_empty());

        press(&mut app, KeyCode::Char('1'));
        assert!(!app.game.power_up_picker_open());
        assert!(app.game.power_up().used);
        assert_eq!(
            app.game.toast(),
            Some("First letter revealed and locked: C")
        );
    }

    #[test]
    fn win_is_recorded_and_n_starts_over() {
        let mut app = new_app();
        enter_word(&mut app, "slate");
        enter_word(&mut app, "crane");

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.status(), GameStatus::Playing);
        assert_eq!(app.game.attempts(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while playing");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.record(GameStatus::Won, 3);
        stats.record(GameStatus::Lost, 6);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }
}
