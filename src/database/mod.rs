//! Storage module
//!
//! This module holds the repository abstraction and its in-memory backend

pub mod memory;
pub mod repository;
pub mod service;

// Re-export commonly used storage components
pub use memory::MemoryRepository;
pub use repository::{newest_first, Entity, Repository, SharedRepository};
pub use service::DatabaseService;
