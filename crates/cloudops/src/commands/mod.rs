//! Command implementations

pub mod parameter_manager;
pub mod profile;
pub mod service_directory;
pub mod storage;
