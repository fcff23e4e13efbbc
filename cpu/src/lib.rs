//! memory barriers, a 32-bit atomic exchange, and a spin-wait hint, with
//! one portable name per operation.
//!
//! this crate is the substrate a multithreaded kernel builds its lock-free
//! queues, spinlocks, and cross-thread flags on. each operation resolves at
//! build time to the implementation selected for the target architecture
//! (see `src/arch`); there is no runtime dispatch and no runtime state.
//!
//! # operations
//!
//! - [`full_barrier`], [`read_barrier`], [`write_barrier`],
//!   [`dependency_barrier`]: ordering primitives, classified by the weakest
//!   guarantee the caller needs
//! - [`atomic_exchange`]: the one atomic read-modify-write offered,
//!   full-barrier-equivalent on every target
//! - [`cpu_relax`]: advisory spin-wait hint for busy-wait loops
//!
//! # availability
//!
//! the barriers exist on every supported target. the exchange/relax pair is
//! capability-gated: [`HAVE_ATOMIC_EXCHANGE`] reports whether the current
//! target backs them with verified instructions, and on a target that does
//! not, the two functions are not compiled at all - using them is a compile
//! error, never a silently non-atomic fallback. building for an
//! architecture with no port at all fails in `build.rs` with a diagnostic
//! naming the missing port.
//!
//! # example
//!
//! publishing data through a flag word with the one-directional barriers:
//!
//! ```
//! use core::sync::atomic::{AtomicU32, Ordering};
//! use keel_cpu::{read_barrier, write_barrier};
//!
//! static DATA: AtomicU32 = AtomicU32::new(0);
//! static READY: AtomicU32 = AtomicU32::new(0);
//!
//! // publisher
//! DATA.store(42, Ordering::Relaxed);
//! write_barrier();
//! READY.store(1, Ordering::Relaxed);
//!
//! // consumer (normally on another thread)
//! if READY.load(Ordering::Relaxed) == 1 {
//!     read_barrier();
//!     assert_eq!(DATA.load(Ordering::Relaxed), 42);
//! }
//! ```

mod arch;
mod barrier;
#[cfg(has_atomic_exchange)]
mod spin;

pub use barrier::{dependency_barrier, full_barrier, read_barrier, write_barrier};
#[cfg(has_atomic_exchange)]
pub use spin::{atomic_exchange, cpu_relax};

/// true when [`atomic_exchange`] and [`cpu_relax`] are backed by verified
/// instructions on the current target and therefore compiled into this
/// crate. callers that require a guaranteed exchange check this constant
/// (or simply use the functions and let an incapable target fail to
/// compile).
pub const HAVE_ATOMIC_EXCHANGE: bool = arch::HAS_ATOMIC_EXCHANGE;
