// file: src/network/probe.rs
// version: 1.0.0
// guid: b7371e05-ee11-4489-9f9f-7a703445b56f

//! Internet connectivity probe

use crate::config::ProbeConfig;
use crate::error::{AgentError, Result};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Trait for answering "is the internet reachable right now?"
#[async_trait::async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// `Ok(false)` for any unreachable outcome; `Err` only when probing
    /// itself is impossible on this host
    async fn probe(&self) -> Result<bool>;
}

/// Probe that sends a single echo request with the system `ping` utility
pub struct PingProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl PingProbe {
    pub fn new(config: &ProbeConfig) -> Self {
        Self::with_command("ping", ping_args(&config.host), config.timeout)
    }

    /// Run an arbitrary command as the probe; exit status 0 means reachable
    pub fn with_command(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    fn unavailable(&self) -> AgentError {
        AgentError::probe_unavailable(format!(
            "'{}' command not found. Please ensure it's installed and in your PATH",
            self.program
        ))
    }
}

/// Arguments for one echo request to `host`
pub fn ping_args(host: &str) -> Vec<String> {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };
    vec![count_flag.to_string(), "1".to_string(), host.to_string()]
}

#[async_trait::async_trait]
impl ConnectivityProbe for PingProbe {
    async fn probe(&self) -> Result<bool> {
        if which::which(&self.program).is_err() {
            return Err(self.unavailable());
        }

        debug!("Running {} {}", self.program, self.args.join(" "));

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match timeout(self.timeout, status).await {
            Ok(Ok(status)) => {
                debug!("Probe exited with {}", status);
                Ok(status.success())
            }
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => Err(self.unavailable()),
            Ok(Err(e)) => {
                warn!("Unexpected error during connectivity probe: {}", e);
                Ok(false)
            }
            Err(_) => {
                debug!("Probe timed out after {:?}", self.timeout);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_args_single_echo() {
        let args = ping_args("8.8.8.8");
        assert_eq!(args.len(), 3);
        assert_eq!(args[1], "1");
        assert_eq!(args[2], "8.8.8.8");
        if cfg!(windows) {
            assert_eq!(args[0], "-n");
        } else {
            assert_eq!(args[0], "-c");
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_fatal() {
        let probe = PingProbe::with_command(
            "no-such-ping-binary-for-tests",
            vec![],
            Duration::from_secs(1),
        );

        let result = probe.probe().await;

        assert!(matches!(result, Err(AgentError::ProbeUnavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_maps_to_reachability() {
        let up = PingProbe::with_command("true", vec![], Duration::from_secs(5));
        let down = PingProbe::with_command("false", vec![], Duration::from_secs(5));

        assert!(up.probe().await.unwrap());
        assert!(!down.probe().await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_is_unreachable() {
        let probe = PingProbe::with_command(
            "sleep",
            vec!["5".to_string()],
            Duration::from_millis(100),
        );

        assert!(!probe.probe().await.unwrap());
    }
}
