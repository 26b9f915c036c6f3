//! Persistence
//!
//! Two independent string entries in a key-value store. Reads happen once at
//! startup; writes follow each [`PersistCommand`]. Failures are logged here
//! and never bubble up to the UI.

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::BTreeMap;

use crate::calories::CalorieTotal;
use crate::config;
use crate::error::{StorageError, StorageResult};
use crate::state::PersistCommand;
use crate::todo::TodoItem;

/// String-valued key-value store (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// The two keys the tracker owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub calories: &'static str,
    pub todos: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            calories: config::CALORIES_KEY,
            todos: config::TODOS_KEY,
        }
    }
}

/// What a startup read recovered. `None` means "keep the default".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub calories: Option<CalorieTotal>,
    pub todos: Option<Vec<TodoItem>>,
}

/// Read both entries. Each read fails independently and is only logged.
pub fn load_persisted(store: &impl KeyValueStore, keys: &StorageKeys) -> PersistedState {
    let calories = read_calories(store, keys.calories).unwrap_or_else(|e| {
        log::error!("[STORAGE] Error loading calories: {}", e);
        None
    });
    let todos = read_todos(store, keys.todos).unwrap_or_else(|e| {
        log::error!("[STORAGE] Error loading todos: {}", e);
        None
    });
    log::debug!(
        "[STORAGE] Loaded calories={:?}, todos={:?}",
        calories,
        todos.as_ref().map(Vec::len)
    );
    PersistedState { calories, todos }
}

fn read_calories(store: &impl KeyValueStore, key: &str) -> StorageResult<Option<CalorieTotal>> {
    Ok(store
        .get(key)?
        .filter(|raw| !raw.is_empty())
        .map(|raw| CalorieTotal::from_stored(&raw)))
}

fn read_todos(store: &impl KeyValueStore, key: &str) -> StorageResult<Option<Vec<TodoItem>>> {
    let Some(raw) = store.get(key)?.filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let todos = serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
        key: key.to_string(),
        source,
    })?;
    Ok(Some(todos))
}

/// Execute one write
pub fn persist(
    store: &impl KeyValueStore,
    keys: &StorageKeys,
    command: &PersistCommand,
) -> StorageResult<()> {
    match command {
        PersistCommand::SaveCalories(total) => store.set(keys.calories, &total.to_string()),
        PersistCommand::SaveTodos(todos) => {
            let json = serde_json::to_string(todos).map_err(|source| StorageError::Malformed {
                key: keys.todos.to_string(),
                source,
            })?;
            store.set(keys.todos, &json)
        }
    }
}

/// Execute every write, logging and dropping failures
pub fn persist_all(store: &impl KeyValueStore, keys: &StorageKeys, commands: &[PersistCommand]) {
    for command in commands {
        if let Err(e) = persist(store, keys, command) {
            log::error!("[STORAGE] Error saving: {}", e);
        }
    }
}

/// In-memory store with switchable failures
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every following `get` fail, as disabled storage would
    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every following `set` fail, as a full quota would
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub(crate) fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "storage disabled".to_string(),
            });
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}
