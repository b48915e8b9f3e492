//! Storage implementations of the domain repository traits.
//!
//! - [`InMemoryLinkRepository`] - Lock-guarded, process-local link table

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
