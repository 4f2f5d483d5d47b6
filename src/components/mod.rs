//! UI Components
//!
//! Reusable Leptos components.

mod error_message;
mod filter_bar;
mod todo_header;
mod todo_item;
mod todo_list;
mod todo_footer;

pub use error_message::ErrorMessage;
pub use filter_bar::FilterBar;
pub use todo_header::TodoHeader;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use todo_footer::TodoFooter;
