// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;

#[test]
fn fake_clock_starts_where_told() {
    let clock = FakeClock::new(500);
    assert_eq!(clock.now_millis(), 500);
}

#[test]
fn fake_clock_advances() {
    let clock = FakeClock::at_epoch();
    clock.advance_ms(250);
    clock.advance(Duration::from_millis(50));
    assert_eq!(clock.now_millis(), 300);
}

#[test]
fn fake_clock_set_is_absolute() {
    let clock = FakeClock::at_epoch();
    clock.advance_ms(999);
    clock.set(10);
    assert_eq!(clock.now_millis(), 10);
}

#[test]
fn clones_share_time() {
    let clock = FakeClock::at_epoch();
    let other = clock.clone();
    clock.advance_ms(40);
    assert_eq!(other.now_millis(), 40);
}

#[tokio::test]
async fn auto_advance_sleep_moves_time() {
    let clock = FakeClock::at_epoch();
    clock.sleep(Duration::from_millis(120)).await;
    assert_eq!(clock.now_millis(), 120);
}

#[tokio::test]
async fn without_auto_advance_sleep_leaves_time_alone() {
    let clock = FakeClock::at_epoch();
    let frozen = clock.without_auto_advance();
    frozen.sleep(Duration::from_millis(120)).await;
    assert_eq!(clock.now_millis(), 0);
}

#[test]
fn handle_exposes_fake_for_manipulation() {
    let handle = ClockHandle::fake_at(7);
    assert_eq!(handle.now_millis(), 7);
    if let Some(fake) = handle.as_fake() {
        fake.advance_ms(3);
    }
    assert_eq!(handle.now_millis(), 10);
}

#[test]
fn system_handle_has_no_fake() {
    assert!(ClockHandle::system().as_fake().is_none());
}

#[test]
fn system_clock_reads_wall_time() {
    // Any reasonable wall clock is well past zero
    assert!(SystemClock.now_millis() > 0);
}
