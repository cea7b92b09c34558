//! Utility modules for common functionality.
//!
//! Currently just logging configuration.

pub mod logger;
