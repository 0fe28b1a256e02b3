// file: src/router/restart.rs
// version: 1.0.0
// guid: 2e21af0f-1f94-4890-ae6e-ccee964d407c

//! Restart form submission

use super::encoding::encode_form;
use super::form::find_form;
use super::{snippet, NONCE_FIELD, REBOOT_STATUS_PATH, RESTARTING_MARKER, RESTART_PATH};
use crate::config::AgentConfig;
use crate::error::{RestartError, TransportError};
use crate::network::{Page, RouterClient};
use tracing::{debug, error, info, warn};
use url::Url;

/// Which response marker showed the router accepted the restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationMarker {
    RestartingText,
    RebootStatusPage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartConfirmation {
    pub url: Url,
    pub marker: ConfirmationMarker,
}

/// Nonce of the restart form on `page`
pub fn restart_nonce(page: &Page) -> Result<String, RestartError> {
    let form = find_form(&page.body, RESTART_PATH, "post").ok_or_else(|| {
        error!("Could not find the restart form on {}", page.url);
        RestartError::FormNotFound {
            url: page.url.to_string(),
            snippet: snippet(&page.body),
        }
    })?;

    form.hidden_field(NONCE_FIELD)
        .map(str::to_string)
        .ok_or_else(|| {
            error!("Could not find the 'nonce' field on the restart form at {}", page.url);
            RestartError::MissingNonce {
                url: page.url.to_string(),
                snippet: snippet(&page.body),
            }
        })
}

/// Submit the restart form found on `page` using the authenticated `client`
pub async fn restart<C>(
    client: &mut C,
    config: &AgentConfig,
    page: &Page,
) -> Result<RestartConfirmation, RestartError>
where
    C: RouterClient + ?Sized,
{
    let nonce = restart_nonce(page)?;
    debug!("1. Extracted restart nonce: {}", nonce);

    let body = encode_form(&[(NONCE_FIELD, nonce.as_str()), ("Restart", "Restart")])
        .map_err(RestartError::Encoding)?;
    let restart_url = config.restart_url().map_err(TransportError::from)?;

    info!("2. Sending restart command to {}", restart_url);
    let response = client.post_form(&restart_url, &page.url, body).await?;

    match confirmation_marker(&response) {
        Some(marker) => {
            info!("3. Router accepted the restart ({:?})", marker);
            Ok(RestartConfirmation {
                url: response.url,
                marker,
            })
        }
        None => {
            warn!(
                "3. Restart not confirmed; response from {} shows neither marker",
                response.url
            );
            Err(RestartError::Unconfirmed {
                url: response.url.to_string(),
                snippet: snippet(&response.body),
            })
        }
    }
}

fn confirmation_marker(response: &Page) -> Option<ConfirmationMarker> {
    if response.body.contains(RESTARTING_MARKER) {
        Some(ConfirmationMarker::RestartingText)
    } else if response.url.as_str().contains(REBOOT_STATUS_PATH) {
        Some(ConfirmationMarker::RebootStatusPage)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::testing::*;

    const REBOOT_STATUS: &str = "http://192.168.1.254/cgi-bin/rebootstatus.ha";

    #[tokio::test]
    async fn test_restart_confirmed_by_text() {
        // Arrange
        let config = config("Secret1");
        let form_page = page(RESTART, &restart_page("r-nonce"));
        let mut router =
            ScriptedRouter::default().respond(RESTART, "<p>Restarting... please wait</p>");

        // Act
        let confirmation = restart(&mut router, &config, &form_page).await.unwrap();

        // Assert
        assert_eq!(confirmation.marker, ConfirmationMarker::RestartingText);
        let post = router.posts()[0].clone();
        assert_eq!(post.url, RESTART);
        assert_eq!(post.referer, RESTART);
        assert_eq!(post.body.as_deref(), Some("nonce=r-nonce&Restart=Restart"));
    }

    #[tokio::test]
    async fn test_restart_confirmed_by_redirect() {
        let config = config("Secret1");
        let form_page = page(LOGIN, &restart_page("n"));
        let mut router = ScriptedRouter::default().respond(REBOOT_STATUS, "<p>Please wait</p>");

        let confirmation = restart(&mut router, &config, &form_page).await.unwrap();

        assert_eq!(confirmation.marker, ConfirmationMarker::RebootStatusPage);
        assert_eq!(confirmation.url.as_str(), REBOOT_STATUS);
        // Referer is the page the form came from
        assert_eq!(router.posts()[0].referer, LOGIN);
    }

    #[tokio::test]
    async fn test_form_not_found() {
        let config = config("Secret1");
        let form_page = page(RESTART, &login_page("abc"));
        let mut router = ScriptedRouter::default();

        let result = restart(&mut router, &config, &form_page).await;

        assert!(matches!(result, Err(RestartError::FormNotFound { .. })));
        assert!(router.requests.is_empty());
    }

    #[tokio::test]
    async fn test_restart_form_without_nonce() {
        let config = config("Secret1");
        let form_page = page(
            RESTART,
            r#"<form method="post" action="/cgi-bin/restart.ha"><input type="submit" name="Restart" value="Restart"></form>"#,
        );
        let mut router = ScriptedRouter::default();

        let result = restart(&mut router, &config, &form_page).await;

        assert!(matches!(result, Err(RestartError::MissingNonce { .. })));
        assert!(router.requests.is_empty());
    }

    #[tokio::test]
    async fn test_unconfirmed_restart() {
        let config = config("Secret1");
        let form_page = page(RESTART, &restart_page("n"));
        let mut router = ScriptedRouter::default().respond(RESTART, "<p>Error</p>");

        let result = restart(&mut router, &config, &form_page).await;

        match result {
            Err(RestartError::Unconfirmed { url, snippet }) => {
                assert_eq!(url, RESTART);
                assert_eq!(snippet, "<p>Error</p>");
            }
            other => panic!("expected Unconfirmed, got {:?}", other),
        }
    }

    #[test]
    fn test_restart_nonce_from_form_inside_table() {
        let body = r#"<html><body><table><form method=post action=/cgi-bin/restart.ha><tr><td>
<input type=hidden name=nonce value=deadbeef>
<input type=submit name=Restart value=Restart>
</td></tr></form></table></body></html>"#;

        let nonce = restart_nonce(&page(RESTART, body)).unwrap();

        assert_eq!(nonce, "deadbeef");
    }

    #[test]
    fn test_restart_nonce_ignores_other_forms() {
        let body = format!(
            r#"<form method="post" action="/cgi-bin/login.ha"><input type="hidden" name="nonce" value="login"></form>{}"#,
            restart_page("restart")
        );
        let nonce = restart_nonce(&page(RESTART, &body)).unwrap();
        assert_eq!(nonce, "restart");
    }
}
