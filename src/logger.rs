use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

pub fn log_request(
    method: &str,
    path: &str,
    total_served: u64,
) {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let log_entry = format!(
        "{} | {:4} {:20} | {:8} served\n",
        timestamp, method, path, total_served
    );

    // ./requests.log unless LOG_PATH says otherwise
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./requests.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}
