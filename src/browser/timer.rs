//! Status Revert Timer
//!
//! One pending timeout at most. Scheduling drops the previous handle, and a
//! dropped `Timeout` that has not fired yet never will.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

thread_local! {
    static PENDING_REVERT: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Run `callback` after `delay_ms`, cancelling any earlier schedule
pub fn schedule_revert(delay_ms: u64, callback: impl FnOnce() + 'static) {
    let delay = u32::try_from(delay_ms).unwrap_or(u32::MAX);
    let timeout = Timeout::new(delay, callback);
    // the replaced handle may already have fired; dropping it is harmless then
    PENDING_REVERT.with(|slot| slot.borrow_mut().replace(timeout));
}

pub fn cancel_revert() {
    PENDING_REVERT.with(|slot| slot.borrow_mut().take());
}
