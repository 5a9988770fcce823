//! State management module
//! 
//! This module holds the application-wide context shared by request handlers

pub mod context;

// Re-export commonly used state components
pub use context::AppContext;
