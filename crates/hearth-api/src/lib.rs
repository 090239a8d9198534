//! Hearth API — library crate for the assistant's HTTP shell.
//!
//! Re-exports all modules so the binary (`main.rs`) and the e2e test crate
//! can access internal types like `AppState`, `build_router`, and
//! `ServerConfig`. The shell holds no business logic: it rejects blank
//! fields and displays whatever string the pipeline returns.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
