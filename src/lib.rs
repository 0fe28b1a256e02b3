// file: src/lib.rs
// version: 1.0.0
// guid: aaa9b488-8f9a-43ac-96f4-94de67e569d1

//! # Router Restart Agent
//!
//! Checks whether the internet is reachable and, when it is not, logs into the
//! home router's web interface with its nonce-and-MD5 challenge login and
//! submits the restart form.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod router;

pub use error::{AgentError, AuthError, RestartError, Result, TransportError};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
