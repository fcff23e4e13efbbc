// sparc64 (v9) port
//
// barrier mapping follows the membar forms: #LoadLoad for read,
// #StoreStore for write, all four combined for full. the v9 swap
// instruction is unordered on its own, so the exchange must be wrapped in
// barriers; swap(SeqCst) obliges the compiler to emit exactly those
// surrounding membars.
//
// the exchange pair is gated on native 32-bit atomic support
// (target_has_atomic = "32", surfaced by build.rs as has_atomic_exchange).
// without it there is no verified exchange on this target, and per the
// pairing policy cpu_relax is withheld with it - the caller gets a compile
// error instead of a silently non-atomic substitute.

use super::MemoryBarriers;
use core::sync::atomic::{fence, Ordering};

#[cfg(has_atomic_exchange)]
use super::SpinPrimitives;
#[cfg(has_atomic_exchange)]
use core::sync::atomic::AtomicU32;

pub(crate) struct Machine;

pub(crate) const HAS_ATOMIC_EXCHANGE: bool = cfg!(has_atomic_exchange);

impl MemoryBarriers for Machine {
    // membar #LoadLoad | #LoadStore | #StoreLoad | #StoreStore
    #[inline(always)]
    fn full_barrier() {
        fence(Ordering::SeqCst);
    }

    // membar #LoadLoad
    #[inline(always)]
    fn read_barrier() {
        fence(Ordering::Acquire);
    }

    // membar #StoreStore
    #[inline(always)]
    fn write_barrier() {
        fence(Ordering::Release);
    }

    // dependent loads are ordered on v9
    #[inline(always)]
    fn dependency_barrier() {}
}

#[cfg(has_atomic_exchange)]
impl SpinPrimitives for Machine {
    #[inline(always)]
    fn atomic_exchange(word: &AtomicU32, new: u32) -> u32 {
        word.swap(new, Ordering::SeqCst)
    }

    // no hint instruction on sparc; the spin-loop hint degrades to nothing,
    // which is the documented contract
    #[inline(always)]
    fn cpu_relax() {
        core::hint::spin_loop();
    }
}
