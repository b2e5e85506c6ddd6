//! Single-threaded UI runtime for SlideToggle.
//!
//! All pointer input, animation frames and listener callbacks of a toggle are
//! delivered on one thread. The only asynchronous work is the caller-supplied
//! veto predicate, which runs as a future on this runtime: it is polled while
//! the host is resumed and abandoned when the host is destroyed.

mod platform;
mod runtime;

pub use platform::{Clock, ManualClock, RuntimeScheduler, StdClock, TestScheduler};
pub use runtime::{Lifecycle, Runtime, RuntimeHandle, TaskHandle};

pub mod prelude {
    pub use crate::platform::{Clock, RuntimeScheduler};
    pub use crate::runtime::{Lifecycle, Runtime, RuntimeHandle, TaskHandle};
}
