//! Queue event logging behind the `tracing` feature.
//!
//! ```text
//! feature off:  debug!(..) / trace!(..)  ->  expands to nothing
//! feature on:   debug!(..) / trace!(..)  ->  tracing::debug! / tracing::trace!
//! ```
//!
//! The enqueue/dequeue paths call these unconditionally; with the feature off
//! they compile away entirely.
//!
//! # Events
//!
//! | Level   | When                                              |
//! |---------|---------------------------------------------------|
//! | `debug` | queue created, queue shut down                    |
//! | `trace` | caller parks, item dropped, end-of-stream reached |

/// Default filter when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
const DEFAULT_FILTER: &str = "nexus_blocking_queue=trace";

/// Installs a fmt subscriber for queue events.
///
/// Reads `RUST_LOG`, falling back to `nexus_blocking_queue=trace`. Safe to call
/// from several tests in one process: only the first call installs anything.
///
/// A no-op `const fn` without the `tracing` feature.
///
/// # Example
///
/// ```
/// nexus_blocking_queue::init_tracing();
///
/// let queue = nexus_blocking_queue::BoundedQueue::<u64>::new(8).unwrap();
/// queue.shutdown(); // logged at debug with the feature on
/// ```
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = fmt::layer()
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub const fn init_tracing() {}

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod disabled {
    macro_rules! discard {
        ($($arg:tt)*) => {};
    }

    pub(crate) use discard as debug;
    pub(crate) use discard as trace;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, trace};
