//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_host`] - Host extraction for domain statistics

pub mod code_generator;
pub mod url_host;
