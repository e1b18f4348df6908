//! Service Directory: namespace registration

pub mod client;
pub mod model;
pub mod operations;

pub use client::{RegistrationService, RegistrationServiceClient};
pub use model::*;
pub use operations::*;
