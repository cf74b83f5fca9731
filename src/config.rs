// src/config.rs
//
// Fixed configuration. There are no CLI flags, environment variables, or
// config files; the program talks to one known device.

use std::time::Duration;

pub const PORT: &str = "COM3";
pub const BAUD_RATE: u32 = 115_200;

/// Number of recent samples kept for display.
pub const WINDOW_CAPACITY: usize = 200;

/// Upper bound on a single serial read; keeps the acquisition loop from
/// hanging on a silent device.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Minimum spacing between chart rebuilds.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(50);
