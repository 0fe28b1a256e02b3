// file: src/cli/commands.rs
// version: 1.0.0
// guid: e5af9fec-93b0-4399-b8aa-95d70d396672

//! Command implementations for the CLI

use crate::{
    cli::args::Cli,
    config::AgentConfig,
    logging::logger::with_async_operation_span,
    network::{ConnectivityProbe, HttpSession, PingProbe, RouterClient},
    router::{authenticate, restart, restart::restart_nonce, RestartConfirmation},
    Result,
};
use tracing::info;
use url::Url;

/// Switches that change what a run is allowed to do
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip the connectivity probe
    pub force: bool,
    /// Stop after locating the restart form
    pub dry_run: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            force: cli.force,
            dry_run: cli.dry_run,
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Internet reachable, nothing done
    Online,
    /// Logged in and found the restart form, but did not submit it
    DryRun { restart_page: Url },
    Restarted(RestartConfirmation),
}

/// Probe, then log in and restart when the connection is down
pub struct Orchestrator<P, C> {
    config: AgentConfig,
    probe: P,
    session: C,
}

impl<P, C> Orchestrator<P, C>
where
    P: ConnectivityProbe,
    C: RouterClient,
{
    pub fn new(config: AgentConfig, probe: P, session: C) -> Self {
        Self {
            config,
            probe,
            session,
        }
    }

    pub fn session(&self) -> &C {
        &self.session
    }

    pub async fn run(&mut self, options: RunOptions) -> Result<RunOutcome> {
        if options.force {
            info!("Skipping connectivity check (--force)");
        } else {
            let probe = &self.probe;
            let host = &self.config.probe.host;
            info!("Checking internet connectivity via {}", host);
            let online = with_async_operation_span("probe", || async move { probe.probe().await }).await?;

            if online {
                info!("Internet is working fine. No router restart needed.");
                return Ok(RunOutcome::Online);
            }
            info!("No reply from {}; restarting the router", host);
        }

        let config = &self.config;
        let session = &mut self.session;
        let page = with_async_operation_span("login", || async move {
            authenticate(session, config).await
        })
        .await?;

        if options.dry_run {
            restart_nonce(&page)?;
            info!("DRY RUN: Would submit the restart form found on {}", page.url);
            return Ok(RunOutcome::DryRun {
                restart_page: page.url,
            });
        }

        let session = &mut self.session;
        let confirmation = with_async_operation_span("restart", || async move {
            restart(session, config, &page).await
        })
        .await?;

        info!("Router restart process initiated");
        Ok(RunOutcome::Restarted(confirmation))
    }
}

/// Run one check-and-restart cycle with the real probe and HTTP session
pub async fn restart_command(cli: &Cli) -> Result<RunOutcome> {
    let config = AgentConfig::from_cli(cli)?;
    let probe = PingProbe::new(&config.probe);
    let session = HttpSession::new(config.request_timeout)?;

    let mut orchestrator = Orchestrator::new(config, probe, session);
    orchestrator.run(RunOptions::from(cli)).await
}
