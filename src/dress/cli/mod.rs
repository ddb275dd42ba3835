//! # CLI Layer
//!
//! One possible UI client for the inventory. This is the only place that:
//! - Reads from stdin and writes to stdout
//! - Parses command-line flags
//! - Installs the tracing subscriber
//!
//! - `setup.rs`: clap flags and tracing setup
//! - `commands.rs`: menu loop and per-option handlers
//! - `prompt.rs`: line input with re-prompting
//! - `print.rs`: colored output

mod commands;
mod print;
mod prompt;
mod setup;

pub use commands::run;
