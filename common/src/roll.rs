//! # Roll Numbers
//!
//! Students carry a secondary, sequential identifier next to their primary id.
//! The [`RollCounter`] hands these out. It is plain state owned by whoever owns
//! the student collection and is passed by `&mut` wherever a roll number may be
//! issued or observed.

use crate::error::{RecordError, Result};
use crate::records::RollNumber;

/// The first roll number handed out by a fresh counter.
pub const FIRST_ROLL: RollNumber = 1001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollCounter {
    next: RollNumber,
}

impl RollCounter {
    pub fn new() -> Self {
        Self { next: FIRST_ROLL }
    }

    /// Returns the next free roll number and advances the counter.
    ///
    /// Fails with [`RecordError::RollsExhausted`] once the counter cannot move
    /// past the number it would hand out. The counter is left unchanged then.
    pub fn issue(&mut self) -> Result<RollNumber> {
        let roll = self.next;
        self.next = Self::successor(roll)?;
        Ok(roll)
    }

    /// Moves the counter past an explicitly supplied roll number so later
    /// [`issue`](Self::issue) calls never collide with it.
    pub fn observe(&mut self, roll: RollNumber) -> Result<()> {
        if roll >= self.next {
            self.next = Self::successor(roll)?;
        }
        Ok(())
    }

    /// `true` when the counter can still move past `roll`.
    pub fn can_follow(roll: RollNumber) -> bool {
        roll.checked_add(1).is_some()
    }

    fn successor(roll: RollNumber) -> Result<RollNumber> {
        roll.checked_add(1).ok_or(RecordError::RollsExhausted { last: roll })
    }

    pub fn peek(&self) -> RollNumber {
        self.next
    }

    /// How many roll numbers have been issued or skipped past.
    pub fn issued(&self) -> u32 {
        (self.next - FIRST_ROLL) as u32
    }
}

impl Default for RollCounter {
    fn default() -> Self {
        Self::new()
    }
}
