pub mod repositories;

pub use repositories::SqliteHealthCheckRepository;
