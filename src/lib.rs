// ABOUTME: Library root for ghdeploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod error;
pub mod exit;
pub mod output;
pub mod transport;
pub mod types;
