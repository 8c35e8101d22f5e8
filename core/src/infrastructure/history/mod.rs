pub mod mappers;
pub mod repositories;

pub use repositories::history_repository::SqliteHistoryRepository;
