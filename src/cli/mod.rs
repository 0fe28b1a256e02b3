// file: src/cli/mod.rs
// version: 1.0.0
// guid: 5779f2c8-567b-47fa-aacf-04c34e41a1f7

//! Command line interface for the router restart agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{Orchestrator, RunOptions, RunOutcome};
