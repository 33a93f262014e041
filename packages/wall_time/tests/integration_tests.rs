//! End-to-end tests for `wall_time` against the real system clock.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use wall_time::Timestamp;

#[test]
fn running_measurement_grows_across_reads() {
    let timestamp = Timestamp::new();

    thread::sleep(Duration::from_millis(50));

    let first = timestamp.total_ms().unwrap();
    assert!(first >= 50.0, "expected at least the slept delay, got {first}ms");

    thread::sleep(Duration::from_millis(10));

    let second = timestamp.total_ms().unwrap();
    assert!(second > first);
}

#[test]
fn set_end_freezes_the_measurement() {
    let mut timestamp = Timestamp::new();

    thread::sleep(Duration::from_millis(10));
    timestamp.set_end(Utc::now()).unwrap();

    let frozen = timestamp.total_ms();
    thread::sleep(Duration::from_millis(20));

    assert_eq!(timestamp.total_ms(), frozen);
}

#[test]
fn clear_end_resumes_the_measurement() {
    let mut timestamp = Timestamp::new();

    timestamp.set_end(Utc::now()).unwrap();
    let frozen = timestamp.total_ms().unwrap();

    timestamp.clear_end();
    thread::sleep(Duration::from_millis(20));

    assert!(timestamp.total_ms().unwrap() > frozen);
}

#[test]
fn messages_record_in_order_with_real_clock() {
    let timestamp = Timestamp::new();

    timestamp.add_message("first").unwrap();
    thread::sleep(Duration::from_millis(5));
    timestamp.add_message("second").unwrap();

    let snapshot = timestamp.messages();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].1, "first");
    assert_eq!(snapshot[1].1, "second");
    assert!(snapshot[0].0 < snapshot[1].0);
}

#[test]
fn timestamp_can_be_moved_between_threads() {
    let timestamp = Timestamp::new();

    let handle = thread::spawn(move || {
        timestamp.add_message("from worker").unwrap();
        timestamp.total_ms()
    });

    assert!(handle.join().unwrap().is_some());
}
