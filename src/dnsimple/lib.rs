//! # DNSimple Architecture
//!
//! This crate is a **client library for the DNSimple REST API** with a thin
//! command-line front end. The CLI is one consumer of the library; everything
//! it does goes through the same public types another program would use.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses options, resolves credentials, prints results     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Name → handler registry with arity checks                │
//! │  - Each handler: one or two entity calls → CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resource Layer (resources/*.rs)                            │
//! │  - Domain, Record, Contact, Template, Certificate, ...      │
//! │  - Finders and mutations, envelope decoding, 404 mapping    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (client.rs) + Transport (transport/)                │
//! │  - Builds authenticated requests from ApiCredentials        │
//! │  - HttpTransport (production), MockTransport (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Credentials
//!
//! [`credentials::ApiCredentials`] merges values given explicitly (CLI flags
//! or library callers) with a YAML file (`~/.dnsimple` or `$DNSIMPLE_CONFIG`).
//! Explicit values always win. Authentication is HTTP Basic when a password is
//! known, otherwise the `X-DNSimple-Token` header.
//!
//! There is no global state: a [`client::Client`] owns its credentials, so
//! several clients for different accounts can coexist in one process.
//!
//! ## Key Principle: No I/O Outside the CLI
//!
//! From `commands/` inward, code:
//! - Returns regular Rust types (`Result<CmdResult>`, `Result<Domain>`, ...)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Resources and commands**: unit tests against [`transport::memory::MockTransport`],
//!    asserting on the exact requests sent and the lines produced.
//! 2. **Client**: request construction (URL, headers, auth) without a network.
//! 3. **CLI** (`tests/`): the binary end to end for paths that need no network,
//!    such as help, usage errors and credential failures.
//!
//! ## Module Overview
//!
//! - [`client`]: authenticated request construction and dispatch
//! - [`commands`]: the command registry and its handlers
//! - [`credentials`]: credential sources and precedence
//! - [`error`]: the crate error type
//! - [`resources`]: API entities and their operations
//! - [`transport`]: the HTTP seam

pub mod client;
pub mod commands;
pub mod credentials;
pub mod error;
pub mod resources;
pub mod transport;
