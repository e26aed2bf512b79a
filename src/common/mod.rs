//! Shared records, errors and collaborator interfaces

pub mod errors;
pub mod memory;
pub mod traits;
pub mod types;
