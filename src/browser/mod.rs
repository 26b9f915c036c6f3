//! Browser Adapters
//!
//! Thin wrappers over the web APIs the tracker touches.

mod clipboard;
mod storage;
mod timer;

pub use clipboard::copy_text;
pub use storage::BrowserStore;
pub use timer::{cancel_revert, schedule_revert};
