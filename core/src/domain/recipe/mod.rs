pub mod entities;
pub mod ingredients;
pub mod nutrition;
pub mod ports;
pub mod prompt;
pub mod redisplay;
pub mod reply;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
