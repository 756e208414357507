// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn ticks_are_delivered() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let sub = subscribe(ClockHandle::fake_at_epoch(), Duration::from_millis(10), {
        let ticks = Arc::clone(&ticks);
        move || {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    });
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    assert!(ticks.load(Ordering::SeqCst) > 0);
    assert!(sub.is_active());
}

#[tokio::test]
async fn drop_stops_delivery() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let sub = subscribe(ClockHandle::fake_at_epoch(), Duration::from_millis(10), {
        let ticks = Arc::clone(&ticks);
        move || {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    });
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    drop(sub);
    tokio::task::yield_now().await;
    let after = ticks.load(Ordering::SeqCst);
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    assert_eq!(ticks.load(Ordering::SeqCst), after);
}

#[tokio::test]
async fn cancel_consumes_the_token() {
    let sub = subscribe(ClockHandle::fake_at_epoch(), Duration::from_millis(10), || {});
    sub.cancel();
}

#[tokio::test]
async fn real_clock_ticks_on_interval() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let _sub = subscribe(ClockHandle::system(), Duration::from_millis(1), {
        let ticks = Arc::clone(&ticks);
        move || {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(ticks.load(Ordering::SeqCst) > 0);
}
