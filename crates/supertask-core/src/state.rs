//! Application State
//!
//! The whole tracker is one record plus reducers. Each reducer consumes the
//! current state and returns a [`Transition`]: the next state and the
//! persistence writes that change implies.

use chrono::NaiveDate;

use crate::calories::{parse_int_prefix, CalorieTotal};
use crate::config;
use crate::snapshot::DaySnapshot;
use crate::storage::PersistedState;
use crate::todo::TodoItem;

/// Label shown on the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl SubmitStatus {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => config::IDLE_MESSAGE,
            SubmitStatus::Copied => config::COPIED_MESSAGE,
            SubmitStatus::Failed => config::FAILED_MESSAGE,
        }
    }
}

/// A write the UI must perform after applying a transition
#[derive(Debug, Clone, PartialEq)]
pub enum PersistCommand {
    SaveCalories(CalorieTotal),
    SaveTodos(Vec<TodoItem>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub commands: Vec<PersistCommand>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub total_calories: CalorieTotal,
    /// Raw text of the calorie field
    pub calorie_input: String,
    pub todos: Vec<TodoItem>,
    /// Raw text of the new-todo field
    pub new_todo: String,
    pub status: SubmitStatus,
    /// When the status label should go back to idle (ms since epoch)
    pub status_deadline: Option<u64>,
    /// Writes are suppressed until the stored state has been read
    pub is_loaded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt whatever was read from storage and open the write gate.
    ///
    /// Opening the gate writes both keys once, as every value is "new" to
    /// the writers at that point.
    pub fn finish_load(self, persisted: PersistedState) -> Transition {
        let mut next = self;
        if let Some(total) = persisted.calories {
            next.total_calories = total;
        }
        if let Some(todos) = persisted.todos {
            next.todos = todos;
        }
        next.is_loaded = true;
        let commands = vec![
            PersistCommand::SaveCalories(next.total_calories),
            PersistCommand::SaveTodos(next.todos.clone()),
        ];
        Transition { state: next, commands }
    }

    pub fn set_calorie_input(self, text: String) -> Transition {
        let before = self.clone();
        let mut next = self;
        next.calorie_input = text;
        Transition::between(&before, next)
    }

    pub fn set_new_todo(self, text: String) -> Transition {
        let before = self.clone();
        let mut next = self;
        next.new_todo = text;
        Transition::between(&before, next)
    }

    /// Add the typed amount to the total. Non-positive or non-numeric input
    /// is ignored and left in the field.
    pub fn add_calories(self) -> Transition {
        let before = self.clone();
        let mut next = self;
        match parse_int_prefix(&next.calorie_input) {
            Some(amount) if amount > 0 => {
                next.total_calories = next.total_calories.add(amount);
                next.calorie_input.clear();
            }
            _ => {}
        }
        Transition::between(&before, next)
    }

    pub fn add_todo(self) -> Transition {
        let before = self.clone();
        let mut next = self;
        if let Some(item) = TodoItem::new(&next.new_todo) {
            next.todos.push(item);
            next.new_todo.clear();
        }
        Transition::between(&before, next)
    }

    pub fn toggle_todo(self, index: usize) -> Transition {
        let before = self.clone();
        let mut next = self;
        match next.todos.get_mut(index) {
            Some(item) => item.toggle(),
            None => log::warn!(
                "[STATE] toggle_todo index {} out of range (len {})",
                index,
                next.todos.len()
            ),
        }
        Transition::between(&before, next)
    }

    /// Snapshot to export. Reads state only.
    pub fn submit_day(&self, today: NaiveDate) -> DaySnapshot {
        DaySnapshot::new(today, self.total_calories, &self.todos)
    }

    /// Show the outcome of a clipboard write and arm the revert deadline.
    ///
    /// A later submit replaces the deadline of an earlier one.
    pub fn record_submit(self, copied: bool, now_ms: u64) -> Transition {
        let before = self.clone();
        let mut next = self;
        next.status = if copied { SubmitStatus::Copied } else { SubmitStatus::Failed };
        next.status_deadline = Some(now_ms.saturating_add(config::STATUS_REVERT_MS));
        Transition::between(&before, next)
    }

    /// Revert the status label once its deadline has passed.
    pub fn expire_status(self, now_ms: u64) -> Transition {
        let before = self.clone();
        let mut next = self;
        if next.status_deadline.is_some_and(|deadline| now_ms >= deadline) {
            next.status = SubmitStatus::Idle;
            next.status_deadline = None;
        }
        Transition::between(&before, next)
    }
}

impl Transition {
    /// Diff two states into the writes they imply, honouring the load gate
    fn between(before: &AppState, state: AppState) -> Self {
        let mut commands = Vec::new();
        if state.is_loaded {
            if state.total_calories != before.total_calories {
                commands.push(PersistCommand::SaveCalories(state.total_calories));
            }
            if state.todos != before.todos {
                commands.push(PersistCommand::SaveTodos(state.todos.clone()));
            }
        }
        Self { state, commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> AppState {
        AppState::new().finish_load(PersistedState::default()).state
    }

    fn with_todos(todos: &[(&str, bool)]) -> AppState {
        let mut state = loaded();
        state.todos = todos
            .iter()
            .map(|(text, completed)| TodoItem { text: text.to_string(), completed: *completed })
            .collect();
        state
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_add_calories_accumulates() {
        let mut state = loaded();
        for (input, expected) in [("250", 250), ("100", 350), ("1", 351)] {
            let t = state.set_calorie_input(input.to_string()).state.add_calories();
            assert_eq!(t.state.total_calories, CalorieTotal::Count(expected));
            assert_eq!(t.state.calorie_input, "");
            assert_eq!(t.commands, vec![PersistCommand::SaveCalories(CalorieTotal::Count(expected))]);
            state = t.state;
        }
    }

    #[test]
    fn test_add_calories_rejects_bad_input() {
        let start = loaded();
        for input in ["", "abc", "0", "-5", "  ", "-0"] {
            let t = start.clone().set_calorie_input(input.to_string()).state.add_calories();
            assert_eq!(t.state.total_calories, CalorieTotal::Count(0), "input {:?}", input);
            assert_eq!(t.state.calorie_input, input);
            assert!(t.commands.is_empty());
        }
    }

    #[test]
    fn test_add_calories_uses_leading_integer() {
        let t = loaded().set_calorie_input("12.9".to_string()).state.add_calories();
        assert_eq!(t.state.total_calories, CalorieTotal::Count(12));
    }

    #[test]
    fn test_add_calories_to_nan_stays_nan() {
        let mut state = loaded();
        state.total_calories = CalorieTotal::NotANumber;
        let t = state.set_calorie_input("200".to_string()).state.add_calories();
        assert!(t.state.total_calories.is_nan());
        assert_eq!(t.state.calorie_input, "");
        assert!(t.commands.is_empty());
    }

    #[test]
    fn test_add_todo_appends_untrimmed() {
        let state = with_todos(&[("first", false)]);
        let t = state.set_new_todo("  read  ".to_string()).state.add_todo();
        assert_eq!(t.state.todos.len(), 2);
        assert_eq!(t.state.todos[1], TodoItem { text: "  read  ".to_string(), completed: false });
        assert_eq!(t.state.new_todo, "");
        assert_eq!(t.commands, vec![PersistCommand::SaveTodos(t.state.todos.clone())]);
    }

    #[test]
    fn test_add_todo_rejects_blank() {
        let t = loaded().set_new_todo("   ".to_string()).state.add_todo();
        assert!(t.state.todos.is_empty());
        assert_eq!(t.state.new_todo, "   ");
        assert!(t.commands.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = with_todos(&[("a", false), ("b", true)]);
        let once = state.clone().toggle_todo(1);
        assert!(!once.state.todos[1].completed);
        assert_eq!(once.commands.len(), 1);
        let twice = once.state.toggle_todo(1);
        assert_eq!(twice.state.todos, state.todos);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let state = with_todos(&[("a", false)]);
        let t = state.clone().toggle_todo(5);
        assert_eq!(t.state, state);
        assert!(t.commands.is_empty());
    }

    #[test]
    fn test_writes_suppressed_before_load() {
        let t = AppState::new().set_calorie_input("300".to_string()).state.add_calories();
        assert_eq!(t.state.total_calories, CalorieTotal::Count(300));
        assert!(t.commands.is_empty());

        let t = t.state.set_new_todo("x".to_string()).state.add_todo();
        assert_eq!(t.state.todos.len(), 1);
        assert!(t.commands.is_empty());
    }

    #[test]
    fn test_finish_load_adopts_and_writes_both() {
        let persisted = PersistedState {
            calories: Some(CalorieTotal::Count(1200)),
            todos: Some(vec![TodoItem { text: "x".to_string(), completed: true }]),
        };
        let t = AppState::new().finish_load(persisted.clone());
        assert!(t.state.is_loaded);
        assert_eq!(t.state.total_calories, CalorieTotal::Count(1200));
        assert_eq!(t.commands, vec![
            PersistCommand::SaveCalories(CalorieTotal::Count(1200)),
            PersistCommand::SaveTodos(persisted.todos.unwrap()),
        ]);
    }

    #[test]
    fn test_finish_load_keeps_defaults_when_nothing_stored() {
        let t = AppState::new().finish_load(PersistedState::default());
        assert_eq!(t.state.total_calories, CalorieTotal::Count(0));
        assert!(t.state.todos.is_empty());
    }

    #[test]
    fn test_submit_is_read_only_and_repeatable() {
        let mut state = with_todos(&[("a", true), ("b", false), ("  ", true)]);
        state.total_calories = CalorieTotal::Count(500);
        for _ in 0..3 {
            let snapshot = state.submit_day(day());
            assert_eq!(snapshot.tasks, vec!["a".to_string()]);
            assert_eq!(snapshot.total_calories, CalorieTotal::Count(500));
            state = state.record_submit(true, 0).state;
        }
        assert_eq!(state.todos.len(), 3);
        assert_eq!(state.total_calories, CalorieTotal::Count(500));
    }

    #[test]
    fn test_status_reverts_after_delay() {
        let t = loaded().record_submit(true, 10_000);
        assert_eq!(t.state.status.message(), "copied!");
        assert!(t.commands.is_empty());

        let early = t.state.clone().expire_status(10_000 + config::STATUS_REVERT_MS - 1);
        assert_eq!(early.state.status, SubmitStatus::Copied);

        let late = t.state.expire_status(10_000 + config::STATUS_REVERT_MS);
        assert_eq!(late.state.status, SubmitStatus::Idle);
        assert_eq!(late.state.status.message(), "submit button (copies JSON to clipboard)");
    }

    #[test]
    fn test_failed_submit_message() {
        let t = loaded().record_submit(false, 0);
        assert_eq!(t.state.status.message(), "failed to copy");
    }

    #[test]
    fn test_resubmit_extends_deadline() {
        let first = loaded().record_submit(true, 0).state;
        let second = first.record_submit(false, 1500).state;
        // the first submit's deadline no longer applies
        let at_first_deadline = second.clone().expire_status(2000).state;
        assert_eq!(at_first_deadline.status, SubmitStatus::Failed);
        let at_second_deadline = second.expire_status(3500).state;
        assert_eq!(at_second_deadline.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_expire_without_submit_is_noop() {
        let state = loaded();
        assert_eq!(state.clone().expire_status(u64::MAX).state, state);
    }
}
