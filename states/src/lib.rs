//! Owned application state for the people directory.
//!
//! Every piece of UI state has exactly one owner: a typed [`State`] stored in
//! a [`StateCtx`]. Time is virtual ([`Time`]) so that frame-driven timers can be
//! advanced deterministically in tests, and scheduled work is tracked through
//! cancellable [`TaskHandle`]s.

mod ctx;
mod error;
mod state;
mod task;
mod time;

pub use ctx::StateCtx;
pub use error::Error;
pub use state::State;
pub use task::{TaskHandle, TaskId, TaskSlot};
pub use time::Time;
