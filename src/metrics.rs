use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    pub requests_served: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {

        Self::default()

    }

    // returns the running total so the caller can log it
    pub fn record_request(&self) -> u64 {

        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1

    }
}
