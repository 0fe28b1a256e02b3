// file: src/network/mod.rs
// version: 1.0.0
// guid: a5b78fcd-a129-420b-9de4-3d9d67b460dd

//! Network operations module

pub mod probe;
pub mod session;

pub use probe::{ConnectivityProbe, PingProbe};
pub use session::{HttpSession, Page, RouterClient};
