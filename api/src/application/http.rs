pub mod health;
pub mod history;
pub mod home;
pub mod recipe;
pub mod server;
