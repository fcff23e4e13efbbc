// x86 / x86_64 port
//
// x86-TSO (intel sdm vol 3A, memory ordering): loads are not reordered with
// other loads and stores are not reordered with other stores, so the read
// and write barriers only need to pin the compiler - zero instructions
// emitted, by intent. stores *are* reordered after later loads, so the full
// barrier is a real mfence.

use super::{MemoryBarriers, SpinPrimitives};
use core::sync::atomic::{compiler_fence, fence, AtomicU32, Ordering};

pub(crate) struct Machine;

pub(crate) const HAS_ATOMIC_EXCHANGE: bool = true;

impl MemoryBarriers for Machine {
    // mfence
    #[inline(always)]
    fn full_barrier() {
        fence(Ordering::SeqCst);
    }

    // no instruction - the architecture already orders load/load
    #[inline(always)]
    fn read_barrier() {
        compiler_fence(Ordering::SeqCst);
    }

    // no instruction - the architecture already orders store/store
    #[inline(always)]
    fn write_barrier() {
        compiler_fence(Ordering::SeqCst);
    }

    // dependent loads are ordered on x86
    #[inline(always)]
    fn dependency_barrier() {}
}

impl SpinPrimitives for Machine {
    // xchg with a memory operand carries an implicit lock prefix, so the
    // exchange is a full barrier on its own; SeqCst asks for nothing extra
    #[inline(always)]
    fn atomic_exchange(word: &AtomicU32, new: u32) -> u32 {
        word.swap(new, Ordering::SeqCst)
    }

    // pause - de-prioritizes speculative resources for the spinning thread
    // and plays nice with the smt sibling
    #[inline(always)]
    fn cpu_relax() {
        core::hint::spin_loop();
    }
}
