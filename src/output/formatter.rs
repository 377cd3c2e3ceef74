//! Core output formatting traits and plain text implementation

use crate::models::{ProbeOutcome, ProbeReport, RunSummary};
use crate::stats::RunningStats;
use crate::types::DisplayMode;
use std::net::IpAddr;

/// Options controlling how results are rendered
#[derive(Debug, Clone, Copy)]
pub struct FormattingOptions {
    /// Enable ANSI colors in the output
    pub enable_color: bool,
    /// Verbosity selected on the command line
    pub display_mode: DisplayMode,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: false,
            display_mode: DisplayMode::Normal,
        }
    }
}

/// Renderer for the probe stream and the final summary
///
/// Formatters return strings rather than printing, so the same
/// implementations serve the binary, the tests, and the benchmarks.
pub trait OutputFormatter {
    /// Banner printed before the first probe
    fn format_banner(&self, hostname: &str, ip: IpAddr, port: u16) -> String;

    /// One line per probe; `None` suppresses the line (quiet mode)
    fn format_probe_report(
        &self,
        report: &ProbeReport,
        ip: IpAddr,
        stats: &RunningStats,
    ) -> Option<String>;

    /// Final statistics block
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// Render an optional millisecond value, keeping "undefined" visibly
/// distinct from 0.0
pub(crate) fn fmt_ms(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "-".to_string(),
    }
}

/// Plain text formatter without colors
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    fn outcome_text(outcome: &ProbeOutcome) -> String {
        match outcome {
            ProbeOutcome::Success { rtt_ms } => format!("{:.3} ms", rtt_ms),
            ProbeOutcome::Timeout => "timeout".to_string(),
            ProbeOutcome::ConnectError { .. } => "connection error".to_string(),
        }
    }

    fn verbose_suffix(report: &ProbeReport, stats: &RunningStats) -> String {
        if !report.recorded {
            return format!(" [warmup, {} more skipped]", report.remaining_skip);
        }

        let mut suffix = format!(
            " [seq={} mean={} ms loss={:.1}%]",
            report.sequence,
            fmt_ms(stats.mean_rtt()),
            stats.loss_percent()
        );
        if let ProbeOutcome::ConnectError { message } = &report.outcome {
            suffix.push_str(&format!(" ({})", message));
        }
        suffix
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_banner(&self, hostname: &str, ip: IpAddr, port: u16) -> String {
        format!("TCP PING {} ({}) tcp port {}", hostname, ip, port)
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
            line.push_str(&Self::verbose_suffix(report, stats));
        }
        Some(line)
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "--- {} tcp ping statistics ---\n",
            summary.hostname
        ));
        out.push_str(&format!(
            "{} pings, {} success, {} failed, {:.1}% loss, time: {:.3} ms\n",
            summary.total_count,
            summary.success_count,
            summary.fail_count,
            summary.loss_percent,
            summary.total_run_ms
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
