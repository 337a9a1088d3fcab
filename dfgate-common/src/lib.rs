//! # dfgate Common Library
//!
//! Shared code for the dfgate services:
//! - Error type used by configuration loading
//! - TOML configuration file model and discovery
//! - Layered setting resolution (CLI/env → TOML → compiled default)

pub mod config;
pub mod error;

pub use error::{Error, Result};
