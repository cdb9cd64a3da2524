//! # CLI Layer
//!
//! The command-line front end for the library. This module is the **only**
//! place that:
//! - Parses shell arguments
//! - Reads credentials from flags and hands them to the library
//! - Writes to stdout/stderr
//!
//! ## Flow
//!
//! ```text
//!   dnsimple -u ops@example.com -t TOKEN record:list example.com
//!        │
//!        ├─ setup::Cli::parse      global options + command words
//!        ├─ logging::init          RUST_LOG or --verbose
//!        ├─ commands::lookup       unknown name fails before any I/O
//!        ├─ ApiCredentials::resolve(flags ⊕ credentials file)
//!        ├─ commands::execute      handler → CmdResult
//!        └─ print::print_result    lines, then colored messages
//! ```
//!
//! Errors bubble up to `main.rs`, which prints `An error occurred: ...` and
//! exits with status 1.

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;
