//! Calendar clock used by components that print dates.
//!
//! Components read a [`ClockHandle`] from context and fall back to the
//! system clock, so rendering stays deterministic when a test provides a
//! [`FixedClock`].

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;

/// Source of the current local date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shared clock handle provided through Leptos context.
#[derive(Clone)]
pub struct ClockHandle(Arc<dyn Clock>);

impl ClockHandle {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl Clock for ClockHandle {
    fn today(&self) -> NaiveDate {
        self.0.today()
    }
}

/// Read the clock from context, or the system clock when none was provided.
pub fn use_clock() -> ClockHandle {
    use_context::<ClockHandle>().unwrap_or_default()
}
