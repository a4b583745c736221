//! UI Components
//!
//! Reusable Leptos components.

mod heading;
mod panel;
mod item_list;
mod action_button;
mod incrementer;
mod todo_row;
mod new_todo_form;

pub use heading::Heading;
pub use panel::Panel;
pub use item_list::ItemList;
pub use action_button::ActionButton;
pub use incrementer::Incrementer;
pub use todo_row::TodoRow;
pub use new_todo_form::NewTodoForm;
