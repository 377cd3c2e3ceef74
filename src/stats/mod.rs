//! Incremental statistics over the probe outcome stream
//!
//! The aggregator folds one outcome at a time into running
//! count/min/max/mean/jitter/loss values without keeping the full history,
//! so unbounded runs use constant memory.

use crate::models::ProbeOutcome;
use serde::{Deserialize, Serialize};

/// Running statistics over recorded probe outcomes
///
/// `update` must only be called for probes outside the skip window; the
/// scheduler owns that policy. RTT-derived fields stay `None` until the
/// stream makes them meaningful, which keeps "no data" distinct from `0.0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunningStats {
    total_count: u64,
    success_count: u64,
    fail_count: u64,
    sum_rtt: f64,
    min_rtt: Option<f64>,
    max_rtt: Option<f64>,
    mean_rtt: Option<f64>,
    jitter_mean: Option<f64>,
    jitter_samples: u64,
    /// RTT of the most recent successful probe, the jitter reference.
    /// Failures do not clear it: jitter compares the last two successes
    /// regardless of intervening failures.
    prev_rtt: Option<f64>,
    loss_percent: f64,
}

impl RunningStats {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one probe outcome into the running statistics
    pub fn update(&mut self, outcome: &ProbeOutcome) {
        self.total_count += 1;

        match outcome {
            ProbeOutcome::Success { rtt_ms } => {
                let rtt = *rtt_ms;
                self.success_count += 1;
                self.sum_rtt += rtt;
                self.mean_rtt = Some(self.sum_rtt / self.success_count as f64);

                self.min_rtt = Some(match self.min_rtt {
                    Some(min) => min.min(rtt),
                    None => rtt,
                });
                self.max_rtt = Some(match self.max_rtt {
                    Some(max) => max.max(rtt),
                    None => rtt,
                });

                if let Some(prev) = self.prev_rtt {
                    let diff = (rtt - prev).abs();
                    let folded = match self.jitter_mean {
                        Some(mean) => {
                            (mean * self.jitter_samples as f64 + diff)
                                / (self.jitter_samples + 1) as f64
                        }
                        None => diff,
                    };
                    self.jitter_mean = Some(folded);
                    self.jitter_samples += 1;
                }
                self.prev_rtt = Some(rtt);
            }
            ProbeOutcome::Timeout | ProbeOutcome::ConnectError { .. } => {
                self.fail_count += 1;
            }
        }

        self.loss_percent = if self.total_count == 0 {
            0.0
        } else {
            self.fail_count as f64 / self.total_count as f64 * 100.0
        };
    }

    /// Probes recorded so far
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Recorded probes that completed the handshake
    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    /// Recorded probes that timed out or failed to connect
    pub fn fail_count(&self) -> u64 {
        self.fail_count
    }

    /// Minimum round-trip time, defined once one probe succeeded
    pub fn min_rtt(&self) -> Option<f64> {
        self.min_rtt
    }

    /// Maximum round-trip time, defined once one probe succeeded
    pub fn max_rtt(&self) -> Option<f64> {
        self.max_rtt
    }

    /// Mean round-trip time over successful probes
    pub fn mean_rtt(&self) -> Option<f64> {
        self.mean_rtt
    }

    /// Mean absolute difference between consecutive successful RTTs
    ///
    /// Defined once two successes have been recorded.
    pub fn jitter_mean(&self) -> Option<f64> {
        self.jitter_mean
    }

    /// Failure percentage over recorded probes
    pub fn loss_percent(&self) -> f64 {
        self.loss_percent
    }

    /// Spread between slowest and fastest handshake, derived at read time
    pub fn range(&self) -> Option<f64> {
        match (self.min_rtt, self.max_rtt) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }
}
