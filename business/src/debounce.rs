//! Debounced text value.
//!
//! Keystrokes update the draft immediately and (re)start a quiet-period
//! timer on the virtual clock. When the timer comes due, [`Debounced::poll`]
//! hands the draft back exactly once so the owner can commit it.

use chrono::{DateTime, Duration, Utc};
use directory_states::TaskSlot;

use crate::config::DEFAULT_DEBOUNCE_MS;

pub fn default_debounce() -> Duration {
    Duration::milliseconds(DEFAULT_DEBOUNCE_MS as i64)
}

#[derive(Debug)]
pub struct Debounced {
    draft: String,
    /// Last external value seen by [`Debounced::sync_external`] or committed
    /// by [`Debounced::poll`].
    external: String,
    interval: Duration,
    timer: TaskSlot,
    torn_down: bool,
}

impl Debounced {
    pub fn new(initial: impl Into<String>, interval: Duration) -> Self {
        let initial = initial.into();
        Self {
            draft: initial.clone(),
            external: initial,
            interval: interval.max(Duration::zero()),
            timer: TaskSlot::for_owner::<Self>(),
            torn_down: false,
        }
    }

    pub fn with_default_interval(initial: impl Into<String>) -> Self {
        Self::new(initial, default_debounce())
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Time until the pending commit, if any.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Records a keystroke. Replaces any pending commit with a new one
    /// `interval` after `now`.
    pub fn edit(&mut self, draft: impl Into<String>, now: DateTime<Utc>) {
        if self.torn_down {
            log::warn!("Ignoring edit on a torn down debounced input");
            return;
        }
        self.draft = draft.into();
        let deadline = now
            .checked_add_signed(self.interval)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.timer.schedule(deadline);
    }

    /// Follows the externally owned value.
    ///
    /// When it differs from the last one seen, the draft is replaced and the
    /// pending commit dropped. This never produces a commit itself.
    pub fn sync_external(&mut self, external: &str) -> bool {
        if self.external == external {
            return false;
        }
        self.external = external.to_owned();
        if self.draft != external {
            self.draft = external.to_owned();
            if self.timer.cancel() {
                log::trace!("External value replaced a pending debounced edit");
            }
        }
        true
    }

    /// Returns the draft once the quiet period after the last edit has elapsed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<String> {
        if self.torn_down {
            return None;
        }
        self.timer.take_due(now)?;
        log::debug!("Debounced commit: {:?}", self.draft);
        // The owner stores what we hand back, so it becomes the external value.
        self.external = self.draft.clone();
        Some(self.draft.clone())
    }

    /// Cancels the pending commit for good. Later polls return nothing.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.torn_down = true;
    }
}
