// file: src/router/testing.rs
// version: 1.0.0
// guid: 2ac0cc17-2792-4698-8bfa-9da1885d1743

//! Scripted router session for unit tests

use crate::config::{AgentConfig, Credential};
use crate::error::TransportError;
use crate::network::{Page, RouterClient};
use std::collections::VecDeque;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub referer: String,
    pub body: Option<String>,
}

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedRouter {
    responses: VecDeque<Result<Page, TransportError>>,
    pub requests: Vec<RecordedRequest>,
}

impl ScriptedRouter {
    pub fn respond(mut self, url: &str, body: &str) -> Self {
        self.responses.push_back(Ok(page(url, body)));
        self
    }

    pub fn fail(mut self, error: TransportError) -> Self {
        self.responses.push_back(Err(error));
        self
    }

    pub fn posts(&self) -> Vec<&RecordedRequest> {
        self.requests.iter().filter(|r| r.method == "POST").collect()
    }

    fn next(&mut self, url: &Url) -> Result<Page, TransportError> {
        self.responses.pop_front().unwrap_or_else(|| {
            panic!("no scripted response left for {}", url)
        })
    }
}

#[async_trait::async_trait]
impl RouterClient for ScriptedRouter {
    async fn get(&mut self, url: &Url, referer: &Url) -> Result<Page, TransportError> {
        self.requests.push(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            referer: referer.to_string(),
            body: None,
        });
        self.next(url)
    }

    async fn post_form(
        &mut self,
        url: &Url,
        referer: &Url,
        body: Vec<u8>,
    ) -> Result<Page, TransportError> {
        self.requests.push(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            referer: referer.to_string(),
            body: Some(String::from_utf8_lossy(&body).into_owned()),
        });
        self.next(url)
    }
}

pub fn page(url: &str, body: &str) -> Page {
    Page {
        url: Url::parse(url).expect("test URL"),
        body: body.to_string(),
    }
}

pub fn config(password: &str) -> AgentConfig {
    AgentConfig::new("http://192.168.1.254", Credential::new(password).expect("test password"))
        .expect("test config")
}

pub const ROOT: &str = "http://192.168.1.254/";
pub const RESTART: &str = "http://192.168.1.254/cgi-bin/restart.ha";
pub const LOGIN: &str = "http://192.168.1.254/cgi-bin/login.ha";

pub fn login_page(nonce: &str) -> String {
    format!(
        r#"<html><body><form name="pageform" method="post" action="/cgi-bin/login.ha">
<input type="hidden" name="nonce" value="{}">
<input type="password" name="password" size="20">
<input type="hidden" name="hashpassword" value="">
<input type="submit" name="Continue" value="Continue">
</form></body></html>"#,
        nonce
    )
}

pub fn restart_page(nonce: &str) -> String {
    format!(
        r#"<html><body><form method="post" action="/cgi-bin/restart.ha">
<input type="hidden" name="nonce" value="{}">
<input type="submit" name="Restart" value="Restart">
</form></body></html>"#,
        nonce
    )
}
