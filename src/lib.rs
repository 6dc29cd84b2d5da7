//! gitlet library crate — the version-control engine behind the `gitlet`
//! CLI binary.
//!
//! The binary (`src/main.rs`) is a thin façade: it parses argv with
//! `clap`, calls into [`engine`], and renders the resulting `GitletError`
//! (if any) to stdout. Everything that can be unit-tested against a
//! temporary directory lives here instead of in the binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod store;
pub mod telemetry;
