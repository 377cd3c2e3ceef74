//! Probe result and run summary data models

use crate::stats::RunningStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Result of a single probe attempt
///
/// Produced once per probe by the probe engine and never mutated. Timeout
/// means no handshake readiness before the deadline ("unreachable or slow");
/// ConnectError means the OS reported a definite local-stack failure such as
/// connection refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Handshake completed within the timeout window
    Success {
        /// Round-trip time in milliseconds, fractional part retained
        rtt_ms: f64,
    },
    /// No readiness observed before the timeout elapsed
    Timeout,
    /// The OS reported a connection failure
    ConnectError {
        /// OS error text, shown in verbose mode
        message: String,
    },
}

impl ProbeOutcome {
    /// Check if this outcome is a completed handshake
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    /// Round-trip time in milliseconds, if the probe succeeded
    pub fn rtt_ms(&self) -> Option<f64> {
        match self {
            ProbeOutcome::Success { rtt_ms } => Some(*rtt_ms),
            _ => None,
        }
    }
}

/// Per-probe record handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Monotonically increasing probe number, advances for skipped probes too
    pub sequence: u64,

    /// Outcome of this probe
    pub outcome: ProbeOutcome,

    /// Whether this probe entered the statistics (false inside the skip window)
    pub recorded: bool,

    /// Probes still inside the skip window after this one
    pub remaining_skip: u32,
}

/// Terminal record of a measurement run
///
/// Statistics fields that never became defined (for example `min_rtt_ms`
/// after a run with zero successes) stay `None` so the renderer can tell
/// "undefined" apart from an actual 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Hostname as given on the command line
    pub hostname: String,

    /// Resolved target address
    pub ip: IpAddr,

    /// Target TCP port
    pub port: u16,

    /// Probes recorded into statistics (skipped probes excluded)
    pub total_count: u64,

    /// Recorded probes that completed the handshake
    pub success_count: u64,

    /// Recorded probes that timed out or failed to connect
    pub fail_count: u64,

    /// Failure percentage over recorded probes
    pub loss_percent: f64,

    /// Wall-clock duration of the whole run in milliseconds
    pub total_run_ms: f64,

    /// Minimum observed round-trip time
    pub min_rtt_ms: Option<f64>,

    /// Mean round-trip time over successful probes
    pub mean_rtt_ms: Option<f64>,

    /// Maximum observed round-trip time
    pub max_rtt_ms: Option<f64>,

    /// Spread between slowest and fastest handshake
    pub range_ms: Option<f64>,

    /// Mean absolute difference between consecutive successful probes
    pub jitter_ms: Option<f64>,

    /// When the run finished
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Build the summary from the final aggregator state
    pub fn from_stats(
        hostname: &str,
        ip: IpAddr,
        port: u16,
        stats: &RunningStats,
        total_run_ms: f64,
    ) -> Self {
        Self {
            hostname: hostname.to_string(),
            ip,
            port,
            total_count: stats.total_count(),
            success_count: stats.success_count(),
            fail_count: stats.fail_count(),
            loss_percent: stats.loss_percent(),
            total_run_ms,
            min_rtt_ms: stats.min_rtt(),
            mean_rtt_ms: stats.mean_rtt(),
            max_rtt_ms: stats.max_rtt(),
            range_ms: stats.range(),
            jitter_ms: stats.jitter_mean(),
            finished_at: Utc::now(),
        }
    }
}
