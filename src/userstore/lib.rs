//! # Userstore Architecture
//!
//! Userstore keeps a list of user records in a JSON file and supports
//! listing, insertion, lookup by id and removal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Parses flags into `Arguments`, sets up logging           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Checks required arguments, picks the operation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / find / remove, validation via validation.rs │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store invariants
//!
//! - Every `id` in the store is unique. `add` refuses duplicates.
//! - The file always holds a single JSON array. Writes rewrite the whole
//!   array through a temporary file and a rename, so a failed write leaves
//!   the previous contents in place.
//! - `list` returns the file bytes verbatim.
//!
//! ## Module Overview
//!
//! - [`api`]: Invocation arguments, operation dispatch and the API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `User` record
//! - [`validation`]: Record admission rules
//! - [`config`]: Validation strictness and output settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
