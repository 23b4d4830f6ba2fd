//! Press/release state machine.

use tagpress_input::{InputLine, InputMonitor, ReleaseWait};

use crate::pipeline::Pipeline;

/// Where the loop is in the activation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for a press.
    Idle,
    /// Running the pipeline.
    Generating,
    /// Debouncing and waiting for the line to be released.
    AwaitingRelease,
    /// Interrupted; the input line is released when the loop is dropped.
    Stopped,
}

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub cycles_completed: u32,
    pub cycles_failed: u32,
    pub dispatch_failures: u32,
}

/// Polls the input and runs one pipeline cycle per activation.
///
/// At most one cycle is in flight: after a cycle the loop blocks until the
/// line is released before it samples for the next press.
pub struct TriggerLoop<L: InputLine> {
    monitor: InputMonitor<L>,
    pipeline: Pipeline,
    state: LoopState,
    summary: LoopSummary,
}

impl<L: InputLine> TriggerLoop<L> {
    pub fn new(monitor: InputMonitor<L>, pipeline: Pipeline) -> Self {
        Self {
            monitor,
            pipeline,
            state: LoopState::Idle,
            summary: LoopSummary::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn summary(&self) -> LoopSummary {
        self.summary
    }

    /// Sample the input once from `Idle`.
    ///
    /// If the line is pressed, runs the whole activation (cycle plus release
    /// wait) before returning. Returns the state the loop ends up in: `Idle`,
    /// or `Stopped` after an interrupt.
    pub fn step(&mut self) -> LoopState {
        if self.state == LoopState::Stopped || self.monitor.shutdown().is_triggered() {
            self.transition(LoopState::Stopped);
            return self.state;
        }
        if !self.monitor.is_activated() {
            return self.state;
        }

        self.transition(LoopState::Generating);
        match self.pipeline.run_cycle() {
            Ok(report) => {
                self.summary.cycles_completed += 1;
                if !report.dispatched {
                    self.summary.dispatch_failures += 1;
                }
            }
            Err(error) => {
                self.summary.cycles_failed += 1;
                tracing::warn!(%error, "{}", error.user_message());
            }
        }

        self.transition(LoopState::AwaitingRelease);
        match self.monitor.await_release() {
            ReleaseWait::Released => {
                self.transition(LoopState::Idle);
                tracing::info!("waiting for next press");
            }
            ReleaseWait::Interrupted => self.transition(LoopState::Stopped),
        }
        self.state
    }

    /// Run until interrupted, then release the input line.
    pub fn run(mut self) -> LoopSummary {
        let poll_interval = self.monitor.timing().poll_interval;
        tracing::info!("waiting for button press");
        while self.step() != LoopState::Stopped {
            if !self.monitor.shutdown().sleep(poll_interval) {
                self.transition(LoopState::Stopped);
                break;
            }
        }
        let summary = self.summary;
        tracing::info!(
            completed = summary.cycles_completed,
            failed = summary.cycles_failed,
            "stopping; releasing input line"
        );
        drop(self);
        summary
    }

    fn transition(&mut self, next: LoopState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "state change");
            self.state = next;
        }
    }
}
