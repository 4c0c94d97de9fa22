//! # abook Architecture
//!
//! abook is a **UI-agnostic contact book library** with a console client on
//! top. The library owns the data rules; front ends only translate user input
//! into API calls and results into output.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap arguments, the text command parser, the console     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook for the session                     │
//! │  - Dispatches to commands, saves through the DataStore      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, model.rs) and Storage (store/)              │
//! │  - Validated Name/Phone/Birthday, Record, AddressBook       │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never prints, never exits the process and never
//! assumes a terminal. Failures come back as [`error::AbookError`] values.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`book`]: the `AddressBook` container, paging, search, save/load
//! - [`model`]: field validators and the `Record` type
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration file
//! - [`init`]: builds a ready-to-use API from the environment
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
