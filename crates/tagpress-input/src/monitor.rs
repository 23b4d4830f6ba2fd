//! Debounced activation and release detection.

use std::time::Duration;

use crate::line::{InputLine, Level};
use crate::shutdown::ShutdownSignal;

/// Timing constants for release detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorTiming {
    /// Settling delay applied once before release polling starts.
    pub debounce: Duration,
    /// Interval between release samples.
    pub poll_interval: Duration,
}

impl Default for MonitorTiming {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// How [`InputMonitor::await_release`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseWait {
    Released,
    Interrupted,
}

/// Exclusive owner of one input line.
///
/// The line is configured before the monitor exists and released when the
/// monitor is dropped, on every exit path.
#[derive(Debug)]
pub struct InputMonitor<L: InputLine> {
    line: L,
    active_level: Level,
    timing: MonitorTiming,
    shutdown: ShutdownSignal,
}

impl<L: InputLine> InputMonitor<L> {
    /// Monitor an active-low line with default timing.
    pub fn new(line: L, shutdown: ShutdownSignal) -> Self {
        Self {
            line,
            active_level: Level::Low,
            timing: MonitorTiming::default(),
            shutdown,
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: MonitorTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Treat a low level as "pressed" (`true`, the default) or a high level.
    #[must_use]
    pub fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_level = if active_low { Level::Low } else { Level::High };
        self
    }

    pub fn timing(&self) -> MonitorTiming {
        self.timing
    }

    pub fn shutdown(&self) -> &ShutdownSignal {
        &self.shutdown
    }

    /// True if the line reads "pressed" right now.
    pub fn is_activated(&mut self) -> bool {
        self.line.read() == self.active_level
    }

    /// Block until the line reads "released".
    ///
    /// The debounce delay runs to completion before the first sample, so a
    /// bounce inside that window is never mistaken for a release.
    pub fn await_release(&mut self) -> ReleaseWait {
        if !self.shutdown.sleep(self.timing.debounce) {
            return ReleaseWait::Interrupted;
        }
        while self.is_activated() {
            if !self.shutdown.sleep(self.timing.poll_interval) {
                return ReleaseWait::Interrupted;
            }
        }
        tracing::debug!("input released");
        ReleaseWait::Released
    }
}
