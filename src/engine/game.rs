//! The game state machine
//!
//! `GameState` aggregates every tracker and is driven by discrete [`Event`]s.
//! Each event is one synchronous transition; sub-state is computed on copies
//! and committed at the end, then the candidate count is recomputed
//! explicitly whenever the letter tracker changed.

use super::candidates::CandidateCounter;
use super::config::{MAX_GUESSES, Timings, WORD_LEN};
use super::error::{EngineError, GuessError};
use super::input::{InputEditor, LockedPosition};
use super::letters::{KeyView, LetterStateTracker};
use super::powerup::{self, PowerUp, PowerUpState};
use super::processor::{self, Evaluation, RowOutcome};
use super::signals::Signals;
use crate::core::{ALPHABET_LEN, Classification, Feedback, Letter, Word};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// A committed board row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One board cell as the presentation layer draws it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<Letter>,
    pub classification: Option<Classification>,
}

/// Player input, already mapped from keys or clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Letter(Letter),
    Delete,
    Submit,
    OpenPowerUps,
    ClosePowerUps,
    ChoosePowerUp(PowerUp),
    Reset,
}

/// What an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The event had no effect in the current state
    Ignored,
    /// The in-progress row changed
    Edited,
    /// The guess was refused; the row shakes and nothing else changes
    Rejected(GuessError),
    Accepted {
        row: usize,
        feedback: Feedback,
        status: GameStatus,
    },
    PowerUpsOpened,
    PowerUpsClosed,
    PowerUpApplied {
        power_up: PowerUp,
        message: Option<String>,
    },
    Reset,
}

/// Everything about one game
#[derive(Debug, Clone)]
pub struct GameState<D> {
    dictionary: D,
    rng: StdRng,
    solution: Word,
    rows: [Option<GuessRow>; MAX_GUESSES],
    current_row: usize,
    editor: InputEditor,
    letters: LetterStateTracker,
    status: GameStatus,
    power_up: PowerUpState,
    picker_open: bool,
    counter: CandidateCounter,
    remaining: usize,
    signals: Signals,
}

impl<D: Dictionary> GameState<D> {
    /// Start a game with a solution drawn from the dictionary
    ///
    /// `seed` makes the sequence of solutions reproducible.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyAnswerPool` if the dictionary has no answers.
    pub fn new(dictionary: D, seed: Option<u64>, timings: Timings) -> Result<Self, EngineError> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let solution = dictionary
            .random_answer(&mut rng)
            .ok_or(EngineError::EmptyAnswerPool)?;
        Ok(Self::build(dictionary, rng, solution, timings))
    }

    /// Start a game with a fixed solution
    ///
    /// Later resets draw from the dictionary using a fixed seed.
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::{Letter, Word};
    /// use wordle_plus::engine::{Event, GameState, GameStatus};
    /// use wordle_plus::wordlists::{WordList, loader::words_from_slice};
    ///
    /// let dictionary = WordList::new(words_from_slice(&["crane", "slate"]), &[]);
    /// let mut game = GameState::with_solution(dictionary, Word::new("crane").unwrap());
    ///
    /// for c in "CRANE".chars() {
    ///     game.apply(Event::Letter(Letter::from_char(c).unwrap()));
    /// }
    /// game.apply(Event::Submit);
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    #[must_use]
    pub fn with_solution(dictionary: D, solution: Word) -> Self {
        Self::build(
            dictionary,
            StdRng::seed_from_u64(0),
            solution,
            Timings::default(),
        )
    }

    fn build(dictionary: D, rng: StdRng, solution: Word, timings: Timings) -> Self {
        let counter = CandidateCounter::new(dictionary.all_answers());
        let mut game = Self {
            dictionary,
            rng,
            solution,
            rows: Default::default(),
            current_row: 0,
            editor: InputEditor::default(),
            letters: LetterStateTracker::new(),
            status: GameStatus::Playing,
            power_up: PowerUpState::default(),
            picker_open: false,
            counter,
            remaining: 0,
            signals: Signals::new(timings),
        };
        game.recount();
        game
    }

    /// Handle one event at the current time
    pub fn apply(&mut self, event: Event) -> Transition {
        self.apply_at(event, Instant::now())
    }

    /// Handle one event; `now` anchors any signal it fires
    pub fn apply_at(&mut self, event: Event, now: Instant) -> Transition {
        match event {
            Event::Reset => match self.reset() {
                Ok(()) => Transition::Reset,
                Err(e) => {
                    tracing::error!(error = %e, "reset failed, keeping current game");
                    Transition::Ignored
                }
            },
            _ if self.status != GameStatus::Playing => Transition::Ignored,
            Event::Letter(_) | Event::Delete | Event::Submit if self.picker_open => {
                Transition::Ignored
            }
            Event::Letter(letter) => {
                if self.editor.append(letter, &self.letters) {
                    tracing::debug!(%letter, row = self.current_row, "letter typed");
                    Transition::Edited
                } else {
                    Transition::Ignored
                }
            }
            Event::Delete => {
                if self.editor.delete_last() {
                    tracing::debug!(row = self.current_row, "letter deleted");
                    Transition::Edited
                } else {
                    Transition::Ignored
                }
            }
            Event::Submit => self.submit(now),
            Event::OpenPowerUps => {
                if self.power_up.can_use() && !self.picker_open {
                    self.picker_open = true;
                    Transition::PowerUpsOpened
                } else {
                    Transition::Ignored
                }
            }
            Event::ClosePowerUps => {
                if self.picker_open {
                    self.picker_open = false;
                    Transition::PowerUpsClosed
                } else {
                    Transition::Ignored
                }
            }
            Event::ChoosePowerUp(power_up) => self.use_power_up(power_up, now),
        }
    }

    fn submit(&mut self, now: Instant) -> Transition {
        let result = processor::evaluate(&self.editor, &self.solution, &self.dictionary);
        let evaluation = match result {
            Ok(evaluation) => evaluation,
            Err(e) => {
                tracing::debug!(row = self.current_row, error = %e, "guess rejected");
                self.signals.shake(now);
                return Transition::Rejected(e);
            }
        };

        let row = self.current_row;
        let letters = processor::fold_feedback(&self.letters, &evaluation);
        let outcome =
            processor::row_outcome(&evaluation.guess, &self.solution, row, self.power_up.used);
        let Evaluation { guess, feedback } = evaluation;

        tracing::info!(row, guess = %guess, feedback = %feedback.to_emoji(), "guess accepted");

        self.rows[row] = Some(GuessRow { guess, feedback });
        self.letters = letters;
        self.recount();

        match outcome {
            RowOutcome::Won => {
                self.status = GameStatus::Won;
                tracing::info!(attempts = row + 1, solution = %self.solution, "game won");
            }
            RowOutcome::Lost => {
                self.status = GameStatus::Lost;
                tracing::info!(solution = %self.solution, "game lost");
            }
            RowOutcome::Advance { offer_power_up } => {
                if offer_power_up {
                    self.power_up.offer();
                    tracing::info!(row, "power-up offered");
                }
                self.current_row += 1;
                self.editor.next_row();
            }
        }

        Transition::Accepted {
            row,
            feedback,
            status: self.status,
        }
    }

    fn use_power_up(&mut self, power_up: PowerUp, now: Instant) -> Transition {
        if !self.power_up.can_use() {
            return Transition::Ignored;
        }

        let effect = powerup::apply(power_up, &self.solution, &self.letters);

        self.letters = effect.letters;
        if let Some(position) = effect.locked_position {
            self.editor.lock_position(position);
        }
        self.power_up.spend();
        self.picker_open = false;
        self.recount();

        if let Some(message) = &effect.message {
            self.signals.toast(message.clone(), now);
        }

        tracing::info!(%power_up, message = ?effect.message, "power-up used");

        Transition::PowerUpApplied {
            power_up,
            message: effect.message,
        }
    }

    /// Replace the game wholesale with a fresh solution
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyAnswerPool` if no solution can be drawn; the
    /// current game is left untouched.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let solution = self
            .dictionary
            .random_answer(&mut self.rng)
            .ok_or(EngineError::EmptyAnswerPool)?;

        self.solution = solution;
        self.rows = Default::default();
        self.current_row = 0;
        self.editor = InputEditor::default();
        self.letters = LetterStateTracker::new();
        self.status = GameStatus::Playing;
        self.power_up = PowerUpState::default();
        self.picker_open = false;
        self.signals.clear();
        self.recount();

        tracing::info!("new game started");
        Ok(())
    }

    fn recount(&mut self) {
        self.remaining = self.counter.count(self.letters.locked_letters());
    }

    /// Clear transient signals whose time is up; true if anything changed
    pub fn expire_signals(&mut self, now: Instant) -> bool {
        self.signals.expire(now)
    }

    #[must_use]
    pub const fn signals(&self) -> &Signals {
        &self.signals
    }

    #[must_use]
    pub fn shake_active(&self) -> bool {
        self.signals.shake_slot().is_active()
    }

    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.signals.toast_slot().get().map(String::as_str)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn rows(&self) -> &[Option<GuessRow>; MAX_GUESSES] {
        &self.rows
    }

    /// Number of committed guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.iter().flatten().count()
    }

    /// The solution, once the game is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Word> {
        (self.status != GameStatus::Playing).then_some(&self.solution)
    }

    /// The solution regardless of status, for debug displays
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn editor(&self) -> &InputEditor {
        &self.editor
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStateTracker {
        &self.letters
    }

    #[must_use]
    pub const fn locked_position(&self) -> Option<LockedPosition> {
        self.editor.locked_position()
    }

    #[must_use]
    pub const fn power_up(&self) -> PowerUpState {
        self.power_up
    }

    #[must_use]
    pub const fn power_up_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Answers that avoid every locked letter
    #[must_use]
    pub const fn remaining_candidates(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn keyboard(&self) -> [KeyView; ALPHABET_LEN] {
        self.letters.keyboard()
    }

    /// The 6×5 grid as it should be drawn
    ///
    /// Committed rows carry their feedback, the in-progress row shows its
    /// cells with the locked cell marked correct, and later rows are blank.
    #[must_use]
    pub fn board(&self) -> [[Tile; WORD_LEN]; MAX_GUESSES] {
        let mut board = [[Tile::default(); WORD_LEN]; MAX_GUESSES];

        for (i, row) in board.iter_mut().enumerate() {
            if let Some(committed) = &self.rows[i] {
                for (pos, tile) in row.iter_mut().enumerate() {
                    *tile = Tile {
                        letter: Some(committed.guess.letter_at(pos)),
                        classification: Some(committed.feedback.tile(pos)),
                    };
                }
            } else if i == self.current_row && self.status == GameStatus::Playing {
                let locked = self.editor.locked_position();
                for (pos, (tile, cell)) in row.iter_mut().zip(self.editor.cells()).enumerate() {
                    *tile = Tile {
                        letter: *cell,
                        classification: locked
                            .filter(|p| p.index == pos)
                            .map(|_| Classification::Correct),
                    };
                }
            }
        }

        board
    }
}
