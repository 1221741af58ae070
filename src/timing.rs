//! Phase timing.

use std::time::{Duration, Instant};

/// A simple timer for measuring how long a sanitize phase took.
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer with the given phase name.
    pub fn start(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Finish the timer and print the elapsed time.
    pub fn finish(self) {
        println!("  {}", format_phase(&self.name, self.start.elapsed()));
    }
}

fn format_phase(name: &str, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 60.0 {
        format!("[{:.1}m] {}", secs / 60.0, name)
    } else {
        format!("[{:.1}s] {}", secs, name)
    }
}
