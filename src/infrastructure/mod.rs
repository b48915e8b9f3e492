//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
