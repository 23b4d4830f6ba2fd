//! Input line abstraction and software-driven lines.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Internal bias resistor applied when the line is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pull {
    /// Idle high; a switch to ground reads low when pressed.
    #[default]
    Up,
    Down,
    Off,
}

/// A single sampled digital input.
///
/// Implementations are configured when constructed and released when dropped.
pub trait InputLine {
    /// Sample the current level.
    fn read(&mut self) -> Level;
}

impl<L: InputLine + ?Sized> InputLine for Box<L> {
    fn read(&mut self) -> Level {
        (**self).read()
    }
}

/// A line whose level is set from software, possibly from another thread.
///
/// Clones share the same level. Idles high, matching a pulled-up switch.
#[derive(Debug, Clone)]
pub struct SharedLine {
    high: Arc<AtomicBool>,
}

impl Default for SharedLine {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedLine {
    pub fn new() -> Self {
        Self {
            high: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn set(&self, level: Level) {
        self.high.store(level == Level::High, Ordering::SeqCst);
    }

    /// Pull the line low (switch closed).
    pub fn press(&self) {
        self.set(Level::Low);
    }

    /// Let the line return high (switch open).
    pub fn release(&self) {
        self.set(Level::High);
    }
}

impl InputLine for SharedLine {
    fn read(&mut self) -> Level {
        if self.high.load(Ordering::SeqCst) {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Replays a fixed sequence of samples, then repeats the last one forever.
///
/// The sample counter is shared with clones so a test can keep a handle after
/// moving the line into a monitor.
#[derive(Debug, Clone)]
pub struct ScriptedLine {
    samples: VecDeque<Level>,
    last: Level,
    taken: Arc<AtomicUsize>,
}

impl ScriptedLine {
    pub fn new(samples: impl IntoIterator<Item = Level>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            last: Level::High,
            taken: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of samples read so far, across all clones.
    pub fn samples_taken(&self) -> usize {
        self.taken.load(Ordering::SeqCst)
    }

    /// Samples not yet consumed.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl InputLine for ScriptedLine {
    fn read(&mut self) -> Level {
        self.taken.fetch_add(1, Ordering::SeqCst);
        if let Some(level) = self.samples.pop_front() {
            self.last = level;
        }
        self.last
    }
}
