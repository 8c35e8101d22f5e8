pub mod logmeal_client;

pub use logmeal_client::LogMealClient;
