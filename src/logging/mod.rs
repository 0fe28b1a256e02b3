// file: src/logging/mod.rs
// version: 1.0.0
// guid: 177a6d93-5a5f-4b60-b254-54dd7c2a9b85

//! Logging system for the router restart agent

pub mod logger;

pub use logger::init_logger;
