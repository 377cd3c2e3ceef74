//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Output verbosity selected on the command line
///
/// The probe loop only queries this to decide what to hand the renderer;
/// it never changes what gets measured or aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Suppress per-probe lines, print only the final summary
    Quiet,
    /// One line per probe plus the final summary
    Normal,
    /// Per-probe lines with running statistics and OS error detail
    Verbose,
}

impl DisplayMode {
    /// Whether per-probe lines should be rendered at all
    pub fn shows_probes(&self) -> bool {
        !matches!(self, DisplayMode::Quiet)
    }
}

/// Latency classification based on handshake round-trip time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatencyGrade {
    /// Fast handshake (< 50 ms)
    Good,
    /// Noticeable latency (50-200 ms)
    Moderate,
    /// Slow handshake (> 200 ms)
    Poor,
}

impl LatencyGrade {
    /// Classify a round-trip time in milliseconds
    pub fn from_rtt_ms(rtt_ms: f64) -> Self {
        if rtt_ms < 50.0 {
            Self::Good
        } else if rtt_ms < 200.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}
