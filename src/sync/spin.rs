//! Busy-wait raw lock for very short critical sections.
//!
//! [`RawSpinLock`] implements [`lock_api::RawMutex`], so it plugs into
//! `lock_api::Mutex` exactly like `parking_lot::RawMutex` does:
//!
//! ```
//! use bloom_filters::sync::SpinMutex;
//!
//! let counter = SpinMutex::new(0u64);
//! *counter.lock() += 1;
//! assert_eq!(*counter.lock(), 1);
//! ```
//!
//! Acquisition is test-and-test-and-set: a failed compare-exchange falls back to
//! relaxed loads with [`std::hint::spin_loop`] until the lock looks free, then
//! retries. The lock never parks or yields to the scheduler, so it only suits
//! critical sections of a few dozen instructions, such as setting or reading a
//! handful of bits.

use parking_lot::lock_api::{self, GuardSend};
use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};

/// Spin lock implementing [`lock_api::RawMutex`].
#[derive(Debug)]
pub struct RawSpinLock {
    locked: AtomicBool,
}

/// A `lock_api::Mutex` guarded by [`RawSpinLock`].
pub type SpinMutex<T> = lock_api::Mutex<RawSpinLock, T>;

/// RAII guard for [`SpinMutex`].
pub type SpinMutexGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinLock, T>;

// SAFETY: `lock` only returns after atomically flipping `locked` from false to true
// with Acquire ordering, and `unlock` stores false with Release ordering, so at most
// one holder exists at a time and its writes are visible to the next holder.
unsafe impl lock_api::RawMutex for RawSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self {
        locked: AtomicBool::new(false),
    };

    type GuardMarker = GuardSend;

    #[inline]
    fn lock(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
    }

    #[inline]
    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    #[inline]
    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    #[inline]
    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}
