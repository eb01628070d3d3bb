//! Busy flag guarding against duplicate submissions

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that is set while a delivery is in flight
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Set the flag until the returned guard is dropped
    pub fn acquire(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(Arc::clone(&self.0))
    }
}

/// Clears the busy flag on drop, whichever way the delivery ended
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_clear() {
        assert!(!BusyFlag::default().is_set());
    }

    #[test]
    fn test_guard_holds_flag_until_dropped() {
        let flag = BusyFlag::default();
        let guard = flag.acquire();
        assert!(flag.is_set());
        drop(guard);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = BusyFlag::default();
        let observer = flag.clone();
        let _guard = flag.acquire();
        assert!(observer.is_set());
    }

    #[test]
    fn test_guard_released_on_panic() {
        let flag = BusyFlag::default();
        let inner = flag.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.acquire();
            panic!("delivery blew up");
        });
        assert!(result.is_err());
        assert!(!flag.is_set());
    }
}
