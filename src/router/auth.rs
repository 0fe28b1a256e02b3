// file: src/router/auth.rs
// version: 1.0.0
// guid: adae1f05-a2d2-4ff0-b7e1-5b5f4137dd48

//! Challenge-response login against the router's web interface

use super::digest::login_digest;
use super::encoding::encode_form;
use super::form::{find_form, find_hidden_input};
use super::{snippet, LOGIN_PATH, NONCE_FIELD, RESTART_PATH};
use crate::config::AgentConfig;
use crate::error::{AuthError, TransportError};
use crate::network::{Page, RouterClient};
use tracing::{debug, error, info};

/// Log in through `client` and return the page carrying the restart form.
///
/// The session state (cookies) stays in `client`, which the caller keeps
/// for the restart. If the router already recognises the session, no login
/// POST is sent.
pub async fn authenticate<C>(client: &mut C, config: &AgentConfig) -> Result<Page, AuthError>
where
    C: RouterClient + ?Sized,
{
    let root = config.root_url();
    let entry_url = config.restart_url().map_err(TransportError::from)?;
    let login_url = config.login_url().map_err(TransportError::from)?;

    // Seeds the session cookie; the router refuses logins without one
    info!("1. Getting main page from {}", root);
    client.get(&root, &root).await?;

    info!("2. Getting login entry page from {}", entry_url);
    let entry = client.get(&entry_url, &root).await?;

    if find_form(&entry.body, RESTART_PATH, "post").is_some() {
        info!("Already logged in; restart form found on {}", entry.url);
        return Ok(entry);
    }

    let nonce = find_form(&entry.body, LOGIN_PATH, "post")
        .and_then(|form| form.hidden_field(NONCE_FIELD).map(str::to_string))
        .or_else(|| find_hidden_input(&entry.body, NONCE_FIELD))
        .ok_or_else(|| {
            error!("Could not find the 'nonce' field on the login page {}", entry.url);
            AuthError::MissingNonce {
                url: entry.url.to_string(),
                snippet: snippet(&entry.body),
            }
        })?;
    debug!("3. Extracted login nonce: {}", nonce);

    let digest = login_digest(&config.credential, &nonce).map_err(AuthError::Encoding)?;
    debug!("4. Calculated hashpassword: {}", digest);

    let masked = config.credential.masked();
    let body = encode_form(&[
        (NONCE_FIELD, nonce.as_str()),
        ("password", masked.as_str()),
        ("hashpassword", digest.as_str()),
        ("Continue", "Continue"),
    ])
    .map_err(AuthError::Encoding)?;

    info!("5. Sending login to {}", login_url);
    let response = client.post_form(&login_url, &entry.url, body).await?;

    if find_form(&response.body, RESTART_PATH, "post").is_some() {
        info!("6. Login successful; restart form presented at {}", response.url);
        Ok(response)
    } else {
        error!("6. Login failed; no restart form at {}", response.url);
        Err(AuthError::LoginRejected {
            url: response.url.to_string(),
            snippet: snippet(&response.body),
        })
    }
}
