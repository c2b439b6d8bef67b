//! Infrastructure layer implementing the domain's repository contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
