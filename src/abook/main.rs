//! # abook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/abook/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - shell line parsing into Command values (parser.rs)       │
//! │  - the console UserInterface (console.rs)                   │
//! │  - dispatch + session saving (commands.rs)                  │
//! │  - terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  abook library (api.rs and inward)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
