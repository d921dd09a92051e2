// 🔢 Live-instance counter
//
// Tracks how many member/patient records are alive. The count is held by
// whoever owns the counter (the facility), not in a global.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a live-instance count.
///
/// Clones share the same count. Single-threaded by construction (`Rc`).
#[derive(Debug, Clone, Default)]
pub struct InstanceCounter {
    live: Rc<Cell<usize>>,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guards currently alive
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Register one more live instance. The count drops again when the
    /// returned guard is dropped.
    pub fn acquire(&self) -> InstanceGuard {
        self.live.set(self.live.get() + 1);
        InstanceGuard {
            live: Rc::clone(&self.live),
        }
    }
}

/// Held by each counted entity for its whole lifetime
#[derive(Debug)]
pub struct InstanceGuard {
    live: Rc<Cell<usize>>,
}

impl Clone for InstanceGuard {
    // A cloned entity is a new live instance
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        InstanceGuard {
            live: Rc::clone(&self.live),
        }
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_drop() {
        let counter = InstanceCounter::new();
        assert_eq!(counter.live(), 0);

        let a = counter.acquire();
        let b = counter.acquire();
        assert_eq!(counter.live(), 2);

        drop(a);
        assert_eq!(counter.live(), 1);
        drop(b);
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn test_clone_counts_as_new_instance() {
        let counter = InstanceCounter::new();
        let guard = counter.acquire();
        let copy = guard.clone();
        assert_eq!(counter.live(), 2);

        drop(guard);
        drop(copy);
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn test_cloned_counters_share_state() {
        let counter = InstanceCounter::new();
        let other = counter.clone();
        let _guard = other.acquire();
        assert_eq!(counter.live(), 1);
    }
}
