//! Stable exit codes for the `rounds` binary.

/// The operator chose Exit and all data was saved.
pub const OK: i32 = 0;
/// Startup, I/O or input failure (including stdin closing mid-session).
pub const FAILED: i32 = 1;
