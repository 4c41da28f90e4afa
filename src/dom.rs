//! Small DOM-side utilities: clock access, the page-load anchor, and the
//! shared scroll lock.

use std::cell::{Cell, RefCell};

/// Milliseconds since time origin, from `performance.now()`. Returns zero
/// when no window is available so callers degrade instead of panicking.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

thread_local! {
    static PAGE_LOAD_ANCHOR: Cell<Option<f64>> = Cell::new(None);
    static SCROLL_LOCKS: RefCell<LockCounter> = RefCell::new(LockCounter::new());
}

/// Timestamp all stagger deadlines are computed from. Captured on first
/// access (main calls this during startup) and never recomputed.
pub fn page_load_anchor() -> f64 {
    PAGE_LOAD_ANCHOR.with(|anchor| match anchor.get() {
        Some(ms) => ms,
        None => {
            let ms = now_ms();
            anchor.set(Some(ms));
            ms
        }
    })
}

/// Take a hold on the page scroll lock. The body overflow style is only
/// touched when the first hold appears, so the mobile menu and the lightbox
/// can overlap without fighting over it.
pub fn lock_scroll() {
    let first = SCROLL_LOCKS.with(|locks| locks.borrow_mut().acquire());
    if first {
        set_body_overflow(Some("hidden"));
    }
}

/// Release one hold; page scrolling is restored when the last hold is gone.
pub fn unlock_scroll() {
    let last = SCROLL_LOCKS.with(|locks| locks.borrow_mut().release());
    if last {
        set_body_overflow(None);
    }
}

fn set_body_overflow(value: Option<&str>) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let result = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if result.is_err() {
            log::warn!("failed to update body overflow");
        }
    }
}

/// Reference count behind the scroll lock. Saturating on release so a stray
/// double-unlock never underflows into a phantom hold.
#[derive(Debug, Default)]
pub struct LockCounter {
    holds: u32,
}

impl LockCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this hold is the first one (lock should be applied).
    pub fn acquire(&mut self) -> bool {
        self.holds += 1;
        self.holds == 1
    }

    /// Returns true when the last hold was released (lock should be removed).
    pub fn release(&mut self) -> bool {
        if self.holds == 0 {
            return false;
        }
        self.holds -= 1;
        self.holds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_acquire_applies_lock() {
        let mut locks = LockCounter::new();
        assert!(locks.acquire());
        assert!(!locks.acquire());
    }

    #[test]
    fn test_release_restores_only_when_last_hold_drops() {
        let mut locks = LockCounter::new();
        locks.acquire();
        locks.acquire();
        assert!(!locks.release());
        assert!(locks.release());
    }

    #[test]
    fn test_release_without_hold_is_inert() {
        let mut locks = LockCounter::new();
        assert!(!locks.release());
        // A later legitimate cycle still behaves.
        assert!(locks.acquire());
        assert!(locks.release());
    }
}
