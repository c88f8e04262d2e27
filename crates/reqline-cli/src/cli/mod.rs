//! CLI for inspecting reqline URL parsing, timeouts and headers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reqline_core::config;
use reqline_core::timeout::TimeoutInput;

use commands::{run_headers, run_host, run_parse, run_timeout, HeaderFlags, TimeoutFlags};

/// Top-level CLI for reqline.
#[derive(Debug, Parser)]
#[command(name = "reqline")]
#[command(about = "reqline: strict request-target parsing and phase timeouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into its components and derived views.
    Parse {
        /// Absolute or relative request target.
        url: String,
        /// Print the components as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the scheme, host and port a client would connect to.
    Host {
        /// Absolute or relative request target.
        url: String,
    },

    /// Resolve connect and request timeouts (flags override the config file).
    Timeout {
        /// Connect timeout: seconds, true/false, or "none".
        #[arg(long)]
        connect: Option<TimeoutInput>,
        /// Read timeout: seconds, true/false, or "none".
        #[arg(long)]
        read: Option<TimeoutInput>,
        /// Total budget for both phases: seconds, true/false, or "none".
        #[arg(long)]
        total: Option<TimeoutInput>,
        /// Pretend the connect phase took this many seconds.
        #[arg(long, value_name = "SECS")]
        elapsed: Option<f64>,
    },

    /// Print the request headers implied by the config and flags.
    Headers {
        /// Add `connection: keep-alive`.
        #[arg(long)]
        keep_alive: bool,
        /// Add `accept-encoding` (gzip,deflate unless a value is given).
        #[arg(long, value_name = "LIST", num_args = 0..=1, require_equals = true)]
        accept_encoding: Option<Option<String>>,
        /// Set `user-agent`.
        #[arg(long)]
        user_agent: Option<String>,
        /// Add basic credentials, given as USER:PASSWORD.
        #[arg(long, value_name = "USER:PASSWORD")]
        basic_auth: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&url, json)?,
            CliCommand::Host { url } => run_host(&url)?,
            CliCommand::Timeout {
                connect,
                read,
                total,
                elapsed,
            } => run_timeout(
                &cfg,
                TimeoutFlags {
                    connect,
                    read,
                    total,
                    elapsed,
                },
            )?,
            CliCommand::Headers {
                keep_alive,
                accept_encoding,
                user_agent,
                basic_auth,
            } => run_headers(
                &cfg,
                HeaderFlags {
                    keep_alive,
                    accept_encoding,
                    user_agent,
                    basic_auth,
                },
            ),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
