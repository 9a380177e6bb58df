//! Transient UI signals that clear themselves
//!
//! Each signal class owns one slot. Firing replaces whatever the slot held and
//! issues a new token, so a clear scheduled for an older firing can never wipe
//! out a newer one.

use super::config::Timings;
use std::time::Instant;

/// Identifies one firing of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignalToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Active<T> {
    token: SignalToken,
    payload: T,
    deadline: Instant,
}

/// A single signal class holding at most one live firing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSlot<T> {
    active: Option<Active<T>>,
}

impl<T> Default for SignalSlot<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T> SignalSlot<T> {
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.active.as_ref().map(|a| &a.payload)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn token(&self) -> Option<SignalToken> {
        self.active.as_ref().map(|a| a.token)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|a| a.deadline)
    }

    fn set(&mut self, token: SignalToken, payload: T, deadline: Instant) {
        self.active = Some(Active {
            token,
            payload,
            deadline,
        });
    }

    /// Token of the live firing if its deadline has passed
    fn due(&self, now: Instant) -> Option<SignalToken> {
        self.active
            .as_ref()
            .filter(|a| a.deadline <= now)
            .map(|a| a.token)
    }

    /// Clear only if `token` is still the live firing
    fn expire_token(&mut self, token: SignalToken) -> bool {
        if self.token() == Some(token) {
            self.active = None;
            return true;
        }
        false
    }

    fn clear(&mut self) {
        self.active = None;
    }
}

/// Shake and toast slots sharing one token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signals {
    timings: Timings,
    next_token: u64,
    shake: SignalSlot<()>,
    toast: SignalSlot<String>,
}

impl Signals {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            next_token: 0,
            shake: SignalSlot::default(),
            toast: SignalSlot::default(),
        }
    }

    #[must_use]
    pub const fn timings(&self) -> Timings {
        self.timings
    }

    fn issue(&mut self) -> SignalToken {
        self.next_token += 1;
        SignalToken(self.next_token)
    }

    /// Shake the current row until `now + timings.shake`
    pub fn shake(&mut self, now: Instant) -> SignalToken {
        let token = self.issue();
        self.shake.set(token, (), now + self.timings.shake);
        token
    }

    /// Show `message` until `now + timings.toast`
    pub fn toast(&mut self, message: impl Into<String>, now: Instant) -> SignalToken {
        let token = self.issue();
        self.toast.set(token, message.into(), now + self.timings.toast);
        token
    }

    #[must_use]
    pub const fn shake_slot(&self) -> &SignalSlot<()> {
        &self.shake
    }

    #[must_use]
    pub const fn toast_slot(&self) -> &SignalSlot<String> {
        &self.toast
    }

    /// Clear every slot whose deadline has passed; true if anything changed
    pub fn expire(&mut self, now: Instant) -> bool {
        let due = [self.shake.due(now), self.toast.due(now)];
        let mut changed = false;
        for token in due.into_iter().flatten() {
            changed |= self.expire_token(token);
        }
        changed
    }

    /// Clear whichever slot `token` belongs to, if it is still live
    fn expire_token(&mut self, token: SignalToken) -> bool {
        self.shake.expire_token(token) || self.toast.expire_token(token)
    }

    /// Earliest pending deadline, for scheduling the next wake-up
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.shake.deadline(), self.toast.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn clear(&mut self) {
        self.shake.clear();
        self.toast.clear();
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}
