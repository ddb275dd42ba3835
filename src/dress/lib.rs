//! # Dress Architecture
//!
//! Dress is an inventory manager for a small clothing store. The core is a
//! library; the interactive menu in the binary is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, re-prompting, colored output         │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! │  - Owns the in-memory product collection                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / edit / delete / list / stats / log workflows    │
//! │  - Save first, then swap the collection, then audit         │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage Layer (store/)       │ │  Audit Log (audit.rs)     │
//! │  - DataStore trait            │ │  - AuditLog trait         │
//! │  - FileStore (CSV)            │ │  - FileAuditLog           │
//! │  - InMemoryStore (testing)    │ │  - MemoryAuditLog         │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Failures come back as [`error::DressError`]; the CLI decides
//! to print them and carry on. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Workflow logic
//! - [`store`]: Record store trait, CSV and in-memory implementations, id generation
//! - [`audit`]: Append-only action trail
//! - [`model`]: `Product` and the input types used to create/edit it
//! - [`config`]: `dress.json` configuration and file locations
//! - [`init`]: Production wiring
//! - [`error`]: Error types

pub mod api;
pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
