//! Command-line plumbing for the `toolsmith` binary.
//!
//! ## Structure
//!
//! - [`config`] - argument and environment parsing, validated into [`config::Config`].
//! - [`commands`] - executes a validated command against the library engines.
//! - [`telemetry`] - `tracing` subscriber setup (logs go to stderr).

pub mod commands;
pub mod config;
pub mod telemetry;
