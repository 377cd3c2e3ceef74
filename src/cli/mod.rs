//! Command-line interface definition and validation

use crate::types::DisplayMode;
use clap::Parser;

/// tcpping - measure TCP handshake latency to a host and port
#[derive(Parser, Debug, Clone)]
#[command(name = "tcpping")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target hostname or IP address
    pub host: String,

    /// TCP port number
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_PORT,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Number of tcp pings; 0 means unlimited
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_COUNT)]
    pub count: u32,

    /// Delay in seconds between consecutive pings
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_INTERVAL_SECS)]
    pub interval: f64,

    /// Seconds to wait for handshake completion before giving up
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Number of leading pings to exclude from statistics (warmup)
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_SKIP)]
    pub skip: u32,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Show running statistics and error detail per ping
    #[arg(long)]
    pub verbose: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.quiet && self.verbose {
            return Err("Cannot specify both --quiet and --verbose".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("HOSTNAME cannot be empty".to_string());
        }

        if !self.timeout.is_finite() || self.timeout <= 0.0 {
            return Err("--timeout must be greater than 0".to_string());
        }

        if !self.interval.is_finite() || self.interval < 0.0 {
            return Err("--interval cannot be negative".to_string());
        }

        Ok(())
    }

    /// Output verbosity implied by the flags
    pub fn display_mode(&self) -> DisplayMode {
        if self.quiet {
            DisplayMode::Quiet
        } else if self.verbose {
            DisplayMode::Verbose
        } else {
            DisplayMode::Normal
        }
    }

    /// Whether colored output should be used
    pub fn enable_color(&self) -> bool {
        if self.no_color {
            false
        } else {
            self.color || crate::defaults::DEFAULT_ENABLE_COLOR
        }
    }
}
