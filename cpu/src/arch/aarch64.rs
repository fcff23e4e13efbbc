// aarch64 port
//
// weakly ordered: loads reorder with loads and stores with stores, so every
// barrier kind except the dependency one maps to a real dmb. the
// architecture does order address-dependent loads, so dependency_barrier
// stays empty here too.

use super::{MemoryBarriers, SpinPrimitives};
use core::sync::atomic::{fence, AtomicU32, Ordering};

pub(crate) struct Machine;

pub(crate) const HAS_ATOMIC_EXCHANGE: bool = true;

impl MemoryBarriers for Machine {
    // dmb ish
    #[inline(always)]
    fn full_barrier() {
        fence(Ordering::SeqCst);
    }

    // dmb ishld
    #[inline(always)]
    fn read_barrier() {
        fence(Ordering::Acquire);
    }

    // dmb ish (release fences order store/store and load/store)
    #[inline(always)]
    fn write_barrier() {
        fence(Ordering::Release);
    }

    #[inline(always)]
    fn dependency_barrier() {}
}

impl SpinPrimitives for Machine {
    // swpal with lse, ldaxr/stlxr retry loop without; either way the
    // acquire-release halves plus SeqCst make the exported operation a
    // full barrier
    #[inline(always)]
    fn atomic_exchange(word: &AtomicU32, new: u32) -> u32 {
        word.swap(new, Ordering::SeqCst)
    }

    // yield (isb on some cores)
    #[inline(always)]
    fn cpu_relax() {
        core::hint::spin_loop();
    }
}
