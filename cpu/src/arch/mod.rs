// per-target implementation selection
//
// each supported architecture is one module defining a unit type Machine
// that implements the contracts below. exactly one module compiles per
// target; build.rs rejects architectures with no port before we get here,
// the compile_error below is the backstop if the two tables ever drift.

use core::sync::atomic::AtomicU32;

// ordering contract every port must provide
//
// barriers are classified by the weakest guarantee the caller needs (full
// vs read vs write) because full fences cost markedly more than
// one-directional ones on several targets. every kind must at minimum pin
// the compiler: an implementation body may emit no instruction, but it may
// never be invisible to the optimizer. dependency_barrier is the one
// exception - its contract is to compile to nothing observable.
pub(crate) trait MemoryBarriers {
    // two-way fence for loads and stores, cpu and compiler
    fn full_barrier();
    // load/load ordering
    fn read_barrier();
    // store/store ordering
    fn write_barrier();
    // data-dependency ordering marker, no-op on every current port
    fn dependency_barrier();
}

// spin-lock support pair
//
// a port provides both operations or neither: the relax hint exists for
// exchange-based spin loops, so a target without a verified exchange
// withholds the hint with it. the exported exchange must be
// full-barrier-equivalent even where the native instruction is not
// inherently ordered.
pub(crate) trait SpinPrimitives {
    fn atomic_exchange(word: &AtomicU32, new: u32) -> u32;
    fn cpu_relax();
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) use x86::{Machine, HAS_ATOMIC_EXCHANGE};

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::{Machine, HAS_ATOMIC_EXCHANGE};

#[cfg(target_arch = "sparc64")]
mod sparc64;
#[cfg(target_arch = "sparc64")]
pub(crate) use sparc64::{Machine, HAS_ATOMIC_EXCHANGE};

#[cfg(not(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "sparc64",
)))]
compile_error!(
    "no memory-barrier port for this target architecture; \
     add a module under cpu/src/arch/ and an entry in build.rs"
);

// the build script owns the recognition table; pull it in so the tests
// below can exercise it directly
#[cfg(test)]
#[path = "../../build.rs"]
#[allow(dead_code)]
mod build_script;
