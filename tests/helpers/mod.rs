//! Test helpers module
//!
//! This module provides utilities and helpers for testing the SportsHub API:
//! a live server on an ephemeral port and request payload builders.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
