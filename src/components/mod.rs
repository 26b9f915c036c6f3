//! UI Components
//!
//! The pieces of the tracker card.

mod calorie_form;
mod calorie_total;
mod new_todo_form;
mod submit_button;
mod todo_list;

pub use calorie_form::CalorieForm;
pub use calorie_total::CalorieTotalBox;
pub use new_todo_form::NewTodoForm;
pub use submit_button::SubmitButton;
pub use todo_list::TodoList;
