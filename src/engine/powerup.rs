//! One-shot assistive power-ups
//!
//! The power-up is offered once per game, after the third accepted guess, and
//! the player spends it on exactly one of three effects. No effect ever
//! unlocks a letter or lowers a classification.

use super::input::LockedPosition;
use super::letters::{LetterState, LetterStateTracker};
use crate::core::{Letter, Word};
use std::fmt;

/// The three effects a player can choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUp {
    /// Reveal the solution's first letter and lock it into every later guess
    RevealAndLock,
    /// Mark up to two unseen solution letters as present
    HintTwo,
    /// Lock out half of the unseen letters that are not in the solution
    ClearHalf,
}

impl PowerUp {
    pub const ALL: [Self; 3] = [Self::RevealAndLock, Self::HintTwo, Self::ClearHalf];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::RevealAndLock => "Reveal Letter",
            Self::HintTwo => "Hint Letters",
            Self::ClearHalf => "Clear Keyboard",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RevealAndLock => "Get one letter in the right spot",
            Self::HintTwo => "Get 2 letters that are in the word",
            Self::ClearHalf => "Remove half of wrong letters",
        }
    }
}

impl fmt::Display for PowerUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether the power-up is on offer and whether it has been spent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerUpState {
    pub available: bool,
    pub used: bool,
}

impl PowerUpState {
    #[must_use]
    pub const fn can_use(self) -> bool {
        self.available && !self.used
    }

    /// Put the power-up on offer unless it was already spent
    pub fn offer(&mut self) {
        if !self.used {
            self.available = true;
        }
    }

    /// Spend the power-up for the rest of the game
    pub fn spend(&mut self) {
        self.used = true;
        self.available = false;
    }
}

/// Result of applying an effect, ready for the caller to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUpEffect {
    pub letters: LetterStateTracker,
    pub locked_position: Option<LockedPosition>,
    /// Notification for the player; `None` when the effect revealed nothing
    pub message: Option<String>,
}

/// Compute an effect's outcome against a copy of the letter tracker
#[must_use]
pub fn apply(power_up: PowerUp, solution: &Word, letters: &LetterStateTracker) -> PowerUpEffect {
    match power_up {
        PowerUp::RevealAndLock => reveal_and_lock(solution, letters),
        PowerUp::HintTwo => hint_two(solution, letters),
        PowerUp::ClearHalf => clear_half(solution, letters),
    }
}

fn reveal_and_lock(solution: &Word, letters: &LetterStateTracker) -> PowerUpEffect {
    let first = solution.letter_at(0);
    let mut next = letters.clone();
    next.upgrade(first, LetterState::Correct);

    PowerUpEffect {
        letters: next,
        locked_position: Some(LockedPosition {
            index: 0,
            letter: first,
        }),
        message: Some(format!("First letter revealed and locked: {first}")),
    }
}

fn hint_two(solution: &Word, letters: &LetterStateTracker) -> PowerUpEffect {
    let revealed: Vec<Letter> = solution
        .unique_letters()
        .into_iter()
        .filter(|&l| letters.state(l) == LetterState::Unset)
        .take(2)
        .collect();

    let mut next = letters.clone();
    for &letter in &revealed {
        next.upgrade(letter, LetterState::Present);
    }

    let message = (!revealed.is_empty()).then(|| {
        let list: Vec<String> = revealed.iter().map(ToString::to_string).collect();
        format!("Letters in the word: {}", list.join(", "))
    });

    PowerUpEffect {
        letters: next,
        locked_position: None,
        message,
    }
}

fn clear_half(solution: &Word, letters: &LetterStateTracker) -> PowerUpEffect {
    let wrong: Vec<Letter> = Letter::alphabet()
        .filter(|&l| !letters.is_classified(l))
        .filter(|&l| !solution.contains(l))
        .collect();

    let mut next = letters.clone();
    let half = wrong.len() / 2;
    for &letter in &wrong[..half] {
        next.lock(letter);
    }

    PowerUpEffect {
        letters: next,
        locked_position: None,
        message: Some(format!("Removed {half} wrong letters from keyboard")),
    }
}
