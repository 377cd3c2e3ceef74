//! Run configuration data model and validation

use crate::types::{AppError, DisplayMode, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Immutable policy for one measurement run
///
/// Built once from CLI input plus the resolved target address, validated
/// before the probe loop starts, and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hostname as given on the command line, kept for display only
    pub hostname: String,

    /// Resolved target address (resolution happens before config is built)
    pub target_ip: IpAddr,

    /// Target TCP port (1-65535)
    pub target_port: u16,

    /// Number of probes to send; 0 means unbounded
    pub probe_count: u32,

    /// Delay between probes in seconds, applied after each probe
    pub interval_seconds: f64,

    /// Bound on handshake completion wait in seconds
    pub timeout_seconds: f64,

    /// Number of leading probes excluded from statistics
    pub skip_count: u32,

    /// Output verbosity
    pub display_mode: DisplayMode,

    /// Enable colored terminal output
    pub enable_color: bool,

    /// Emit the final summary as JSON instead of text
    pub json: bool,

    /// Enable debug output
    pub debug: bool,
}

impl Config {
    /// Get the connect timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds)
    }

    /// Get the inter-probe interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_seconds)
    }

    /// Get the full target socket address
    pub fn target(&self) -> SocketAddr {
        SocketAddr::new(self.target_ip, self.target_port)
    }

    /// Validate the configuration and return any errors
    ///
    /// Invalid policy is rejected here, before the run starts; nothing is
    /// silently fixed up.
    pub fn validate(&self) -> Result<()> {
        if self.hostname.is_empty() {
            return Err(AppError::config("Target hostname cannot be empty"));
        }

        if self.target_port == 0 {
            return Err(AppError::config("Target port must be in range 1-65535"));
        }

        if !self.timeout_seconds.is_finite() || self.timeout_seconds <= 0.0 {
            return Err(AppError::config("Timeout must be greater than 0"));
        }

        if self.timeout_seconds > 300.0 {
            return Err(AppError::config("Timeout cannot exceed 300 seconds"));
        }

        if !self.interval_seconds.is_finite() || self.interval_seconds < 0.0 {
            return Err(AppError::config("Interval cannot be negative"));
        }

        if self.interval_seconds > 3600.0 {
            return Err(AppError::config("Interval cannot exceed 3600 seconds"));
        }

        Ok(())
    }
}
