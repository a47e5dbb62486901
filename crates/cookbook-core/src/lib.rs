//! Core data types for the cookbook publishing toolchain.
//!
//! This crate defines the documents the toolchain reads and writes: the
//! optional `cookbook.toml` project configuration, the Quarto book outline,
//! the Jupyter Book table of contents, conda environment manifests, and the
//! path rewriting used to map source chapters onto published notebooks.
//!
//! This crate is intentionally free of transformation logic beyond parsing
//! and serialization.

/// Name of the optional project configuration file.
pub const CONFIG_FILE: &str = "cookbook.toml";

pub mod config;
pub mod environment;
pub mod outline;
pub mod path;
pub mod toc;
