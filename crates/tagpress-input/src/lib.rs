//! Digital input monitoring for tagpress.
//!
//! [`InputMonitor`] owns exactly one [`InputLine`] for its whole lifetime and
//! turns raw level samples into two operations: an instantaneous
//! [`is_activated`](InputMonitor::is_activated) check and a blocking
//! [`await_release`](InputMonitor::await_release) that debounces before polling.
//!
//! # Lines
//!
//! - [`GpioLine`] - a Raspberry Pi GPIO pin (feature `gpio`, on by default)
//! - [`SharedLine`] - a level shared between threads, driven by software
//! - [`ScriptedLine`] - a fixed sequence of samples for deterministic tests
//!
//! Every wait is sliced against a [`ShutdownSignal`] so an operator interrupt
//! ends it promptly.

mod error;
mod gpio;
mod line;
mod monitor;
mod shutdown;

pub use error::HardwareConfigError;
pub use gpio::GpioLine;
pub use line::{InputLine, Level, Pull, ScriptedLine, SharedLine};
pub use monitor::{InputMonitor, MonitorTiming, ReleaseWait};
pub use shutdown::ShutdownSignal;
