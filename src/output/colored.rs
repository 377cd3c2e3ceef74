//! Colored terminal output formatting

use crate::models::{ProbeOutcome, ProbeReport, RunSummary};
use crate::output::formatter::{fmt_ms, FormattingOptions, OutputFormatter};
use crate::stats::RunningStats;
use crate::types::{DisplayMode, LatencyGrade};
use colored::Colorize;
use std::net::IpAddr;

/// Formatter that color-codes probe lines by handshake latency
pub struct ColoredFormatter {
    options: FormattingOptions,
}

impl ColoredFormatter {
    /// Create a new colored formatter
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    fn outcome_text(outcome: &ProbeOutcome) -> String {
        match outcome {
            ProbeOutcome::Success { rtt_ms } => {
                let text = format!("{:.3} ms", rtt_ms);
                match LatencyGrade::from_rtt_ms(*rtt_ms) {
                    LatencyGrade::Good => text.green().to_string(),
                    LatencyGrade::Moderate => text.yellow().to_string(),
                    LatencyGrade::Poor => text.red().to_string(),
                }
            }
            ProbeOutcome::Timeout => "timeout".yellow().bold().to_string(),
            ProbeOutcome::ConnectError { .. } => "connection error".red().bold().to_string(),
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_banner(&self, hostname: &str, ip: IpAddr, port: u16) -> String {
        format!(
            "{} {} ({}) tcp port {}",
            "TCP PING".bold(),
            hostname.bold(),
            ip,
            port
        )
    }

    fn format_probe_report(
        &self,
        report: &ProbeReport,
        ip: IpAddr,
        stats: &RunningStats,
    ) -> Option<String> {
        if !self.options.display_mode.shows_probes() {
            return None;
        }

        let mut line = format!("{}: {}", ip, Self::outcome_text(&report.outcome));

        if self.options.display_mode == DisplayMode::Verbose {
            let suffix = if !report.recorded {
                format!(" [warmup, {} more skipped]", report.remaining_skip)
            } else {
                let mut s = format!(
                    " [seq={} mean={} ms loss={:.1}%]",
                    report.sequence,
                    fmt_ms(stats.mean_rtt()),
                    stats.loss_percent()
                );
                if let ProbeOutcome::ConnectError { message } = &report.outcome {
                    s.push_str(&format!(" ({})", message));
                }
                s
            };
            line.push_str(&suffix.dimmed().to_string());
        }

        Some(line)
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let loss = format!("{:.1}% loss", summary.loss_percent);
        let loss = if summary.fail_count > 0 {
            loss.red().to_string()
        } else {
            loss.green().to_string()
        };

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n",
            format!("--- {} tcp ping statistics ---", summary.hostname).bold()
        ));
        out.push_str(&format!(
            "{} pings, {} success, {} failed, {}, time: {:.3} ms\n",
            summary.total_count, summary.success_count, summary.fail_count, loss, summary.total_run_ms
        ));
        out.push_str(&format!(
            "rtt min/mean/max/range = {}/{}/{}/{} ms\n",
            fmt_ms(summary.min_rtt_ms),
            fmt_ms(summary.mean_rtt_ms),
            fmt_ms(summary.max_rtt_ms),
            fmt_ms(summary.range_ms)
        ));
        out.push_str(&format!("jitter mean = {} ms", fmt_ms(summary.jitter_ms)));
        out
    }
}
