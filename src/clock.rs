//! Elapsed-time clock backing the timer display.

use std::time::{Duration, Instant};

/// Wall-clock timer, started on shuffle and frozen on solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    started: Option<Instant>,
    frozen: Option<Duration>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the clock from zero.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = None;
    }

    /// Freeze the clock at the current elapsed time.
    pub fn stop(&mut self) {
        if let Some(started) = self.started {
            self.frozen = Some(started.elapsed());
        }
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Whole seconds elapsed; zero before the first start.
    pub fn elapsed_seconds(&self) -> u64 {
        match (self.started, self.frozen) {
            (Some(started), _) => started.elapsed().as_secs(),
            (None, Some(frozen)) => frozen.as_secs(),
            (None, None) => 0,
        }
    }
}

/// Format a second count as "1 minute, 5 seconds".
///
/// The minutes component only appears once it is nonzero.
pub fn format_elapsed(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    let mut text = String::new();

    if minutes > 0 {
        text.push_str(&format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }
    if seconds > 0 || minutes == 0 {
        if minutes > 0 {
            text.push_str(", ");
        }
        text.push_str(&format!(
            "{} second{}",
            seconds,
            if seconds == 1 { "" } else { "s" }
        ));
    }

    text
}
