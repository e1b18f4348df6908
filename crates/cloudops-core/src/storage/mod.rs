//! Cloud Storage: restore soft-deleted objects

pub mod client;
pub mod model;
pub mod operations;

pub use client::{Storage, StorageClient};
pub use model::*;
pub use operations::*;
