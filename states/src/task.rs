//! Scheduled work on the virtual clock.
//!
//! - `TaskId`: identifies a scheduled task by owner type plus a generation counter
//! - `TaskHandle`: a task id paired with a `CancellationToken`
//! - `TaskSlot`: holds at most one pending task; scheduling replaces and cancels
//!   the previous one
//!
//! Tasks here are deadlines, not futures. The frame loop asks the slot
//! whether its task is due with [`TaskSlot::take_due`].

use std::any::TypeId;

use chrono::{DateTime, Duration, Utc};
use tokio_util::sync::CancellationToken;

/// Unique identifier for a scheduled task.
///
/// Two ids from the same slot share a `TypeId` and differ in generation; the
/// higher generation is always the more recent schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a scheduled task with cancellation support.
///
/// Clones share the same token, so cancelling any clone cancels the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[derive(Debug)]
struct Pending {
    handle: TaskHandle,
    deadline: DateTime<Utc>,
}

/// A single-occupancy schedule.
///
/// At most one task is pending. [`TaskSlot::schedule`] cancels whatever was
/// pending before storing the new deadline, and dropping the slot cancels the
/// pending task.
#[derive(Debug)]
pub struct TaskSlot {
    owner: TypeId,
    generation: u64,
    pending: Option<Pending>,
}

impl TaskSlot {
    pub fn new(owner: TypeId) -> Self {
        Self {
            owner,
            generation: 0,
            pending: None,
        }
    }

    pub fn for_owner<T: 'static>() -> Self {
        Self::new(TypeId::of::<T>())
    }

    /// Schedules a task at `deadline`, cancelling the one pending before.
    pub fn schedule(&mut self, deadline: DateTime<Utc>) -> TaskHandle {
        if let Some(previous) = self.pending.take() {
            log::trace!(
                "Replacing pending task generation {} (deadline {})",
                previous.handle.id().generation(),
                previous.deadline
            );
            previous.handle.cancel();
        }

        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(self.owner, self.generation),
            CancellationToken::new(),
        );
        self.pending = Some(Pending {
            handle: handle.clone(),
            deadline,
        });
        handle
    }

    /// Cancels the pending task. Returns `true` when one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.handle.is_cancelled())
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending
            .as_ref()
            .filter(|pending| !pending.handle.is_cancelled())
            .map(|pending| pending.deadline)
    }

    /// Time left until the pending task is due, zero when already due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline()
            .map(|deadline| (deadline - now).max(Duration::zero()))
    }

    /// Takes the pending task when its deadline has passed.
    ///
    /// A task cancelled through an outstanding handle is discarded and never
    /// reported as due.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<TaskId> {
        let pending = self.pending.as_ref()?;
        if pending.handle.is_cancelled() {
            self.pending = None;
            return None;
        }
        if pending.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.handle.id())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
