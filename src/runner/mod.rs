//! Probe scheduling control loop
//!
//! Drives repeated probes at the configured interval, feeds recorded
//! outcomes to the aggregator, and stops on count exhaustion, cancellation,
//! or a fatal local socket error. Exactly one probe is in flight at any
//! time; the loop is strictly sequential.

use crate::error::Result;
use crate::models::{Config, ProbeReport, RunSummary};
use crate::output::OutputFormatter;
use crate::probe;
use crate::stats::RunningStats;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{self, Instant};

/// Asynchronous cancellation signal shared with the interrupt handler
///
/// A single monotonic boolean (once true, never false), so relaxed atomic
/// ordering is sufficient. The paired `Notify` wakes the inter-probe sleep
/// early; the flag itself is only acted on at iteration boundaries.
#[derive(Clone, Default)]
pub struct CancelSignal {
    flag: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl CancelSignal {
    /// Create a fresh, un-triggered signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger cancellation and wake a sleeping scheduler
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
        // notify_one stores a permit when nobody is sleeping yet, so a
        // cancellation arriving between probes is not lost.
        self.wake.notify_one();
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Wait until `cancel` is called
    pub async fn notified(&self) {
        self.wake.notified().await;
    }
}

/// Install a ctrl-c / SIGTERM handler that trips the given signal
///
/// Spawned as the only auxiliary task in the process; everything else runs
/// on the scheduler's thread of control.
pub fn install_interrupt_handler(cancel: CancelSignal) {
    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            let mut sigterm = match tokio::signal::unix::signal(
                tokio::signal::unix::SignalKind::terminate(),
            ) {
                Ok(s) => s,
                Err(_) => {
                    let _ = ctrl_c.await;
                    cancel.cancel();
                    return;
                }
            };
            tokio::select! {
                _ = ctrl_c => {}
                _ = sigterm.recv() => {}
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
        }

        cancel.cancel();
    });
}

/// Sequential probe scheduler
pub struct Runner {
    config: Config,
    cancel: CancelSignal,
}

impl Runner {
    /// Create a runner for a validated configuration
    pub fn new(config: Config, cancel: CancelSignal) -> Self {
        Self { config, cancel }
    }

    /// Run the probe loop to completion and return the final summary
    ///
    /// Per-probe lines go through the formatter as they happen; the summary
    /// is returned rather than printed so the caller owns presentation.
    /// A fatal socket error aborts the run and propagates as `Err`.
    pub async fn run(&self, formatter: &dyn OutputFormatter) -> Result<RunSummary> {
        let target = self.config.target();
        let timeout = self.config.timeout();
        let interval = self.config.interval();
        let bounded = self.config.probe_count > 0;

        let started = Instant::now();
        let mut stats = RunningStats::new();
        let mut sequence: u64 = 0;
        let mut skip_left = self.config.skip_count;
        let mut remaining = self.config.probe_count;

        loop {
            // Cancellation is observed here, never mid-probe: a probe already
            // in flight always completes and gets reported.
            if self.cancel.is_cancelled() {
                break;
            }
            if bounded && remaining == 0 {
                break;
            }

            let outcome = probe::probe(target, timeout).await?;

            sequence += 1;
            if bounded {
                remaining -= 1;
            }

            let recorded = if skip_left > 0 {
                skip_left -= 1;
                false
            } else {
                stats.update(&outcome);
                true
            };

            let report = ProbeReport {
                sequence,
                outcome,
                recorded,
                remaining_skip: skip_left,
            };
            if let Some(line) =
                formatter.format_probe_report(&report, self.config.target_ip, &stats)
            {
                println!("{}", line);
            }

            let last_scheduled = bounded && remaining == 0;
            if !last_scheduled && !self.cancel.is_cancelled() && !interval.is_zero() {
                tokio::select! {
                    _ = time::sleep(interval) => {}
                    _ = self.cancel.notified() => {}
                }
            }
        }

        let total_run_ms = started.elapsed().as_secs_f64() * 1000.0;
        Ok(RunSummary::from_stats(
            &self.config.hostname,
            self.config.target_ip,
            self.config.target_port,
            &stats,
            total_run_ms,
        ))
    }
}
