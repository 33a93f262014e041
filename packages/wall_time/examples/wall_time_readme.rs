//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `wall_time` package `README.md`.

fn main() {
    use chrono::Utc;
    use wall_time::Timestamp;

    // Start is captured at creation.
    let mut timestamp = Timestamp::new();

    // Simulate some work
    std::thread::sleep(std::time::Duration::from_millis(10));

    // Still running: measured against "now" on every read.
    println!("Elapsed so far: {}ms", timestamp.total_ms().unwrap());

    // Mark completion; the elapsed value is now frozen.
    timestamp.set_end(Utc::now()).unwrap();
    println!("Operation took: {}ms", timestamp.total_ms().unwrap());
}
