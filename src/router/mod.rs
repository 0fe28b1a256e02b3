// file: src/router/mod.rs
// version: 1.0.0
// guid: 4b55a964-4609-47e1-bcb8-f84cfc06d45b

//! Router web interface protocol
//!
//! Login is a challenge-response over two GETs and one POST; the restart is a
//! second nonce-protected form POST on the page the login lands on.

pub mod auth;
pub mod digest;
pub mod encoding;
pub mod form;
pub mod restart;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::authenticate;
pub use form::{find_form, FormDescriptor};
pub use restart::{restart, ConfirmationMarker, RestartConfirmation};

/// Login form target
pub const LOGIN_PATH: &str = "/cgi-bin/login.ha";

/// Restart form target, also the page that shows the login form to strangers
pub const RESTART_PATH: &str = "/cgi-bin/restart.ha";

/// Page the router redirects to once a restart is under way
pub const REBOOT_STATUS_PATH: &str = "/cgi-bin/rebootstatus.ha";

/// Body marker of an accepted restart
pub const RESTARTING_MARKER: &str = "Restarting";

pub const NONCE_FIELD: &str = "nonce";

/// Diagnostic excerpt length for unexpected pages
pub const SNIPPET_CHARS: usize = 1000;

/// First `SNIPPET_CHARS` characters of a page body
pub fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}
