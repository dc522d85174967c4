//! Command handlers.
//!
//! Each submodule exposes a single `execute` function taking its parsed
//! arguments plus the shared globals, config, and output manager.

pub mod completions;
pub mod init;
pub mod model;
pub mod service;
