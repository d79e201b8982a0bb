use std::any::Any;

use chrono::{DateTime, Duration, Utc};

use crate::State;

/// Virtual clock shared by everything that schedules work.
///
/// The application refreshes it from the wall clock once per frame; tests
/// leave it alone and move it forward with [`Time::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl Time {
    pub fn at(virt: DateTime<Utc>) -> Self {
        Self { virt }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
