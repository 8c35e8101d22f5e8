pub mod list_history;
pub mod save_history;
pub mod view_history;
