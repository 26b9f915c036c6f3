//! Fixed settings
//!
//! The tracker has no runtime configuration; these are the only knobs.

/// localStorage key holding the calorie total
pub const CALORIES_KEY: &str = "supertask-calories";

/// localStorage key holding the todo list
pub const TODOS_KEY: &str = "supertask-todos";

/// How long a submit result stays on the button before reverting
pub const STATUS_REVERT_MS: u64 = 2000;

pub const IDLE_MESSAGE: &str = "submit button (copies JSON to clipboard)";
pub const COPIED_MESSAGE: &str = "copied!";
pub const FAILED_MESSAGE: &str = "failed to copy";
