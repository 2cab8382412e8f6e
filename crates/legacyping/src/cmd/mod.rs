use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod ping;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ping a server and print its status.
    Ping(PingArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Ping(args) => ping::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Server to ping: `host` or `host:port`.
    pub target: String,
    /// Legacy positional form: `[port] [timeout] [protocol]` after a bare host,
    /// `[timeout] [protocol]` after `host:port`.
    #[arg(value_name = "ARGS", num_args = 0..=3)]
    pub rest: Vec<String>,
    /// Port, overriding any positional port.
    #[arg(long)]
    pub port: Option<u16>,
    /// Connect and receive timeout (e.g. 1.7, 2s, 500ms). Default: 1.7s.
    #[arg(long, env = "LEGACYPING_TIMEOUT")]
    pub timeout: Option<String>,
    /// Protocol: 1 (Beta 1.8-1.3), 2 (1.4-1.5), 3 (1.6), or a name such as `1.6`.
    #[arg(long, short = 'p', env = "LEGACYPING_PROTOCOL")]
    pub protocol: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
