pub mod local;

pub use local::LocalUploadStorage;
