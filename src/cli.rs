//! Command-line interface parsing for TicketHub
//!
//! This module handles parsing of CLI arguments using clap. The booking
//! endpoint and the log file location are injected here rather than being
//! fixed inside the form.

use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;
use thiserror::Error;

use crate::client::DEFAULT_ENDPOINT;
use crate::logging;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint: '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidEndpoint(String),
}

/// TicketHub - Book concert tickets from the terminal
#[derive(Parser, Debug)]
#[command(name = "tickethub")]
#[command(about = "Concert ticket booking form")]
#[command(version)]
pub struct Cli {
    /// URL that bookings are POSTed to
    #[arg(long, value_name = "URL", env = "TICKETHUB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// File that receives log output (defaults to the platform data directory)
    #[arg(long, value_name = "PATH", env = "TICKETHUB_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Endpoint that receives bookings
    pub endpoint: Url,
    /// Where logs are written, if a location could be determined
    pub log_file: Option<PathBuf>,
}

/// Parses an endpoint argument into a URL.
///
/// # Returns
/// * `Ok(Url)` if the string is an absolute http or https URL
/// * `Err(CliError::InvalidEndpoint)` otherwise
pub fn parse_endpoint_arg(s: &str) -> Result<Url, CliError> {
    let url = Url::parse(s).map_err(|_| CliError::InvalidEndpoint(s.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(CliError::InvalidEndpoint(s.to_string())),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the endpoint is not usable
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let endpoint = parse_endpoint_arg(&cli.endpoint)?;
        let log_file = cli.log_file.clone().or_else(logging::default_log_path);

        Ok(StartupConfig { endpoint, log_file })
    }
}
