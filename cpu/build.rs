// build-time target dispatch for the barrier/atomic primitive set
//
// recognizes the {architecture, native-atomic-width} pair cargo reports and
// decides, once per build, which capabilities the compiled crate carries:
//
// - recognized arch with a verified exchange: has_atomic_exchange cfg set,
//   atomic_exchange and cpu_relax get compiled
// - recognized arch without one (sparc64 lacking native 32-bit atomics):
//   cfg left unset, barriers only; using the exchange is a compile error
// - unrecognized arch: the build fails here with a diagnostic naming the
//   missing port. a barrier that silently compiled to nothing would show up
//   as intermittent corruption in every lock-free structure above us, so
//   failing the build wins over a degraded default.
//
// the recognition table lives in exchange_backed so the crate's tests can
// exercise it (src/arch/mod.rs includes this file under cfg(test)).

use std::env;
use std::process::exit;

// recognition table, keyed by target_arch plus the comma-separated list of
// widths the target has native atomic rmw for.
// Some(true): barriers and the exchange pair; Some(false): barriers only;
// None: no port, the build must fail.
pub fn exchange_backed(arch: &str, atomic_widths: &str) -> Option<bool> {
    let has_atomic_32 = atomic_widths.split(',').any(|w| w == "32");
    match arch {
        // xchg is inherently locked; pause hint available
        "x86" | "x86_64" => Some(true),
        // swpal / ldaxr+stlxr; yield hint available
        "aarch64" => Some(true),
        // v9 swap is only usable when the target exposes native 32-bit
        // atomics; barriers are available either way
        "sparc64" => Some(has_atomic_32),
        _ => None,
    }
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rustc-check-cfg=cfg(has_atomic_exchange)");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let atomic_widths = env::var("CARGO_CFG_TARGET_HAS_ATOMIC").unwrap_or_default();

    match exchange_backed(&arch, &atomic_widths) {
        Some(true) => println!("cargo::rustc-cfg=has_atomic_exchange"),
        Some(false) => {}
        None => {
            eprintln!(
                "keel-cpu: no port for target architecture `{arch}`.\n\
                 memory barriers must map to verified instruction sequences; \
                 add a module under cpu/src/arch/ (and an entry in build.rs) \
                 with semantics checked against the architecture's memory \
                 ordering specification before building for this target."
            );
            exit(1);
        }
    }
}
