//! Supertask Core
//!
//! Everything the tracker does that does not need a browser: the data model,
//! the reducers, the day snapshot and the persistence rules.
//! This crate has NO platform dependencies, so it is tested on the host.

pub mod config;
mod calories;
mod error;
mod snapshot;
mod state;
mod storage;
mod todo;

pub use calories::{parse_int_prefix, CalorieTotal};
pub use error::{StorageError, StorageResult};
pub use snapshot::{format_day, DaySnapshot};
pub use state::{AppState, PersistCommand, SubmitStatus, Transition};
pub use storage::{
    load_persisted, persist, persist_all, KeyValueStore, PersistedState, StorageKeys,
};
pub use todo::TodoItem;
