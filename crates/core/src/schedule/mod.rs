//! Timers that decide when the map is regenerated.
//!
//! Nothing here sleeps or spawns threads. Every operation takes the current
//! [`Instant`](std::time::Instant) from the caller, which keeps the timing
//! rules deterministic and lets the watcher loop own the clock.

pub mod debounce;
pub mod interval;
pub mod scheduler;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use interval::IntervalTimer;
pub use scheduler::{Scheduler, Trigger};
