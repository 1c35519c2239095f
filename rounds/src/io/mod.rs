//! I/O helpers: files, configuration and the operator console.

pub mod config;
pub mod console;
pub mod data_store;
pub mod line_store;
pub mod paths;
