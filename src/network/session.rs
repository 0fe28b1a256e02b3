// file: src/network/session.rs
// version: 1.0.0
// guid: 08f5cdd3-57d4-4276-a574-f5db65e535bf

//! Browser-like HTTP session against the router

use crate::error::TransportError;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER, USER_AGENT,
};
use std::time::Duration;
use tracing::debug;
use url::Url;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fetched page: where the redirects ended and what it said
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

/// Trait for the stateful session the login and restart steps run on
#[async_trait::async_trait]
pub trait RouterClient: Send {
    /// GET `url`, following redirects
    async fn get(&mut self, url: &Url, referer: &Url) -> Result<Page, TransportError>;

    /// POST an already encoded form body to `url`, following redirects
    async fn post_form(
        &mut self,
        url: &Url,
        referer: &Url,
        body: Vec<u8>,
    ) -> Result<Page, TransportError>;
}

/// reqwest-backed session keeping the router's cookies between requests
pub struct HttpSession {
    client: reqwest::Client,
}

impl HttpSession {
    /// Create a session with browser-like default headers and a cookie jar
    pub fn new(request_timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(request_timeout)
            .build()?;

        Ok(Self { client })
    }

    async fn into_page(response: reqwest::Response) -> Result<Page, TransportError> {
        let url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("{} -> HTTP {} ({} bytes)", url, status.as_u16(), body.len());

        Ok(Page { url, body })
    }
}

#[async_trait::async_trait]
impl RouterClient for HttpSession {
    async fn get(&mut self, url: &Url, referer: &Url) -> Result<Page, TransportError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(REFERER, referer.as_str())
            .send()
            .await?;
        Self::into_page(response).await
    }

    async fn post_form(
        &mut self,
        url: &Url,
        referer: &Url,
        body: Vec<u8>,
    ) -> Result<Page, TransportError> {
        debug!("POST {} (referer {})", url, referer);
        let response = self
            .client
            .post(url.clone())
            .header(REFERER, referer.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        Self::into_page(response).await
    }
}
