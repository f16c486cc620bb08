//! Stable exit codes for the registrar CLI.

/// Command completed, including a clean shell exit.
pub const OK: i32 = 0;
/// Startup, configuration, or I/O failure.
pub const INVALID: i32 = 1;
