//! Editing the in-progress guess
//!
//! The row is modelled as five cells so a locked position can sit in the middle
//! of it with gaps on either side. Whatever the cells hold, callers read the
//! guess back compacted (gaps dropped).

use super::letters::LetterStateTracker;
use crate::core::{Letter, WORD_LEN};

/// A board column whose letter is fixed for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedPosition {
    pub index: usize,
    pub letter: Letter,
}

/// The row currently being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputEditor {
    cells: [Option<Letter>; WORD_LEN],
    locked: Option<LockedPosition>,
}

impl InputEditor {
    /// An empty row, seeded with the locked letter if there is one
    #[must_use]
    pub fn new(locked: Option<LockedPosition>) -> Self {
        let mut editor = Self {
            cells: [None; WORD_LEN],
            locked: None,
        };
        if let Some(position) = locked {
            editor.lock_position(position);
        }
        editor
    }

    /// Fix `position` for this and every later row
    ///
    /// The locked letter overwrites whatever was typed in that cell.
    /// Out-of-range indices are ignored.
    pub fn lock_position(&mut self, position: LockedPosition) {
        if position.index >= WORD_LEN {
            tracing::warn!(
                index = position.index,
                "ignoring out-of-range locked position"
            );
            return;
        }
        self.cells[position.index] = Some(position.letter);
        self.locked = Some(position);
    }

    #[must_use]
    pub const fn locked_position(&self) -> Option<LockedPosition> {
        self.locked
    }

    fn is_locked_index(&self, index: usize) -> bool {
        self.locked.is_some_and(|p| p.index == index)
    }

    /// Type a letter into the first open cell, skipping the locked one
    ///
    /// Letters locked out of the game and typing into a full row are no-ops.
    /// Returns true if the row changed.
    pub fn append(&mut self, letter: Letter, letters: &LetterStateTracker) -> bool {
        if letters.is_locked(letter) {
            return false;
        }

        let open = (0..WORD_LEN).find(|&i| !self.is_locked_index(i) && self.cells[i].is_none());
        match open {
            Some(i) => {
                self.cells[i] = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the last typed cell, never the locked one
    ///
    /// Returns true if the row changed.
    pub fn delete_last(&mut self) -> bool {
        let last = (0..WORD_LEN)
            .rev()
            .find(|&i| !self.is_locked_index(i) && self.cells[i].is_some());
        match last {
            Some(i) => {
                self.cells[i] = None;
                true
            }
            None => false,
        }
    }

    /// Raw cells for display, gaps included
    #[must_use]
    pub const fn cells(&self) -> &[Option<Letter>; WORD_LEN] {
        &self.cells
    }

    /// Typed letters with gaps removed
    #[must_use]
    pub fn letters(&self) -> Vec<Letter> {
        self.cells.iter().flatten().copied().collect()
    }

    /// The guess as displayed, gaps removed
    #[must_use]
    pub fn compacted(&self) -> String {
        self.cells.iter().flatten().map(|l| l.as_char()).collect()
    }

    /// The guess that would be submitted
    ///
    /// The locked letter is written into its cell before compaction, so it is
    /// part of the candidate regardless of what the cells hold.
    #[must_use]
    pub fn assemble(&self) -> String {
        let mut cells = self.cells;
        if let Some(position) = self.locked {
            cells[position.index] = Some(position.letter);
        }
        cells.iter().flatten().map(|l| l.as_char()).collect()
    }

    /// Number of filled cells, the locked one included
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fresh row, keeping the locked position
    pub fn next_row(&mut self) {
        *self = Self::new(self.locked);
    }
}
