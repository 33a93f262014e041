//! Demonstrates the message log: chronological free-text annotations attached
//! to a measurement, printed the way a host console would render them.

fn main() {
    use wall_time::Timestamp;

    let timestamp = Timestamp::new();

    timestamp.add_message("acquired connection").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    timestamp.add_message("query returned 42 rows").unwrap();

    for (instant, text) in timestamp.messages() {
        println!("{} {text}", instant.format("%Y-%m-%d %H:%M:%S%.6fZ"));
    }

    println!("Total: {}ms", timestamp.total_ms().unwrap());
}
