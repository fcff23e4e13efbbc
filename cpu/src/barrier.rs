// portable memory barrier operations
//
// one name per barrier kind, resolved at build time to the arch module
// selected in src/arch. classification is by the weakest guarantee the
// caller needs: full fences cost markedly more than one-directional ones on
// several targets, and the caller is trusted to pick the narrowest kind
// that orders what it relies on.

use crate::arch::{Machine, MemoryBarriers};

// full two-way fence: no load or store issued before the call may be
// observed by another thread after one issued after it, or vice versa.
// always also a compiler reordering barrier.
#[inline(always)]
pub fn full_barrier() {
    Machine::full_barrier();
}

// load/load fence: loads before the call are observed before loads after
// it. reduces to a compiler-only barrier on targets whose memory model
// already orders loads (x86-family), a real fence elsewhere.
#[inline(always)]
pub fn read_barrier() {
    Machine::read_barrier();
}

// store/store fence, symmetric to read_barrier. the classic use is between
// writing data and writing the flag that publishes it.
#[inline(always)]
pub fn write_barrier() {
    Machine::write_barrier();
}

// marks call sites that rely on data-dependency ordering. a no-op on every
// supported target (all of them order dependent loads); kept so the
// dependency stays visible at the call site if a port ever needs a real
// instruction here.
#[inline(always)]
pub fn dependency_barrier() {
    Machine::dependency_barrier();
}
