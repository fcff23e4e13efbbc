//! demo: test-and-set spinlock built from the exported primitives
//!
//! two threads take turns incrementing a shared counter under a lock made
//! of nothing but atomic_exchange, cpu_relax, and write_barrier. the final
//! count proves no update was lost.
//!
//! run with: cargo run --release --example spinlock

#[cfg(has_atomic_exchange)]
mod demo {
    use keel_cpu::{atomic_exchange, cpu_relax, write_barrier};
    use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    const THREADS: usize = 2;
    const INCREMENTS: u64 = 100_000;

    struct TasLock(AtomicU32);

    impl TasLock {
        const fn new() -> Self {
            Self(AtomicU32::new(0))
        }

        #[inline]
        fn acquire(&self) {
            while atomic_exchange(&self.0, 1) != 0 {
                cpu_relax();
            }
        }

        #[inline]
        fn release(&self) {
            write_barrier();
            self.0.store(0, Ordering::Relaxed);
        }
    }

    pub fn run() {
        let lock = Arc::new(TasLock::new());
        let counter = Arc::new(AtomicU64::new(0));

        let start = Instant::now();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..INCREMENTS {
                        lock.acquire();
                        let c = counter.load(Ordering::Relaxed);
                        counter.store(c + 1, Ordering::Relaxed);
                        lock.release();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let elapsed = start.elapsed();
        let total = counter.load(Ordering::Relaxed);
        let expected = THREADS as u64 * INCREMENTS;

        println!("threads:       {THREADS}");
        println!("increments:    {INCREMENTS} per thread");
        println!("final counter: {total} (expected {expected})");
        println!(
            "elapsed:       {:?} ({} ns/increment)",
            elapsed,
            elapsed.as_nanos() / total as u128
        );

        assert_eq!(total, expected);
        println!("no lost updates");
    }
}

#[cfg(has_atomic_exchange)]
fn main() {
    demo::run();
}

#[cfg(not(has_atomic_exchange))]
fn main() {
    println!("atomic exchange is not backed on this target; demo skipped");
}
