// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic tick delivery.
//!
//! `subscribe` spawns one task on the current tokio runtime that invokes
//! the callback after every interval elapse. The returned token cancels the
//! task when dropped, so a subscription can never outlive its owner.

use crate::clock::{Clock, ClockHandle};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable handle to a periodic tick task.
///
/// Dropping the token aborts the task.
#[derive(Debug)]
pub struct TickSubscription {
    task: JoinHandle<()>,
}

impl TickSubscription {
    /// Cancel the subscription. Equivalent to dropping the token.
    pub fn cancel(self) {}

    /// Whether the tick task is still scheduled.
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Subscribe to ticks every `interval`, delivered on the current runtime.
///
/// Must be called from within a tokio runtime context.
pub fn subscribe<F>(clock: ClockHandle, interval: Duration, mut on_tick: F) -> TickSubscription
where
    F: FnMut() + Send + 'static,
{
    let task = tokio::spawn(async move {
        loop {
            clock.sleep(interval).await;
            on_tick();
        }
    });
    TickSubscription { task }
}

#[cfg(test)]
#[path = "ticker_tests.rs"]
mod tests;
