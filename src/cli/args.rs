// file: src/cli/args.rs
// version: 1.0.0
// guid: d37d6efc-177e-4244-9eff-ababb0732dae

//! Command line argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "router-restart-agent")]
#[command(about = "Restarts the home router when the internet connection is down")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = "http://192.168.1.254",
        help = "Router base URL or address"
    )]
    pub url: String,

    #[arg(short, long, help = "Router admin access code")]
    pub password: String,

    #[arg(long, default_value = "8.8.8.8", help = "Host pinged to test connectivity")]
    pub probe_host: String,

    #[arg(long, default_value = "15", help = "Seconds to wait for the ping reply")]
    pub probe_timeout: u64,

    #[arg(long, default_value = "30", help = "Seconds to wait for each router request")]
    pub request_timeout: u64,

    #[arg(long, help = "Restart even if the connection looks healthy")]
    pub force: bool,

    #[arg(long, help = "Log in and locate the restart form without submitting it")]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}
