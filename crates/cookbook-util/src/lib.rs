//! Shared utilities for the cookbook publishing toolchain.
//!
//! This crate provides cross-cutting concerns used by all other cookbook
//! crates: the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
