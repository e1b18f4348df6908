//! Parameter Manager: fetch, disable and enable parameter versions

pub mod client;
pub mod model;
pub mod operations;

pub use client::{ParameterManager, ParameterManagerClient};
pub use model::*;
pub use operations::*;
