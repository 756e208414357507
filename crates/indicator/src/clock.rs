// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time abstraction for deterministic testing.
//!
//! The widget captures an explicit epoch from an injected clock at
//! construction and derives every frame index from elapsed time, so tick
//! math never touches ambient wall-clock state. `FakeClock` lets tests
//! control time progression without real delays.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since an arbitrary epoch.
    fn now_millis(&self) -> u64;

    /// Sleep for a duration.
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Real clock using system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Fake clock with controllable time.
///
/// Clones share the same underlying time, so a test can hold one clone and
/// advance the clock a widget observes through another.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,
    /// Whether `sleep` advances time instead of waiting.
    auto_advance: bool,
}

impl FakeClock {
    /// Fake clock starting at `start_millis`.
    pub fn new(start_millis: u64) -> Self {
        FakeClock {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
            auto_advance: true,
        }
    }

    /// Fake clock starting at zero.
    pub fn at_epoch() -> Self {
        Self::new(0)
    }

    /// Clone sharing this clock's time with auto-advance disabled.
    pub fn without_auto_advance(&self) -> Self {
        FakeClock {
            current_millis: Arc::clone(&self.current_millis),
            auto_advance: false,
        }
    }

    /// Advance time by a duration.
    pub fn advance(&self, duration: Duration) {
        self.advance_ms(duration.as_millis() as u64);
    }

    /// Advance time by milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Set absolute time.
    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::at_epoch()
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        if self.auto_advance {
            self.advance(duration);
        }
        // No actual sleep, but yield so a tick loop driven by this clock
        // stays cooperative.
        Box::pin(tokio::task::yield_now())
    }
}

/// Clock handle that can be either real or fake.
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    /// System clock handle.
    pub fn system() -> Self {
        ClockHandle::System(SystemClock)
    }

    /// Fake clock handle starting at zero.
    pub fn fake_at_epoch() -> Self {
        ClockHandle::Fake(FakeClock::at_epoch())
    }

    /// Fake clock handle at a specific time.
    pub fn fake_at(millis: u64) -> Self {
        ClockHandle::Fake(FakeClock::new(millis))
    }

    /// The fake clock for manipulation, or `None` for a system clock.
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            ClockHandle::Fake(clock) => Some(clock),
            ClockHandle::System(_) => None,
        }
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            ClockHandle::System(clock) => clock.now_millis(),
            ClockHandle::Fake(clock) => clock.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        match self {
            ClockHandle::System(clock) => clock.sleep(duration),
            ClockHandle::Fake(clock) => clock.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
