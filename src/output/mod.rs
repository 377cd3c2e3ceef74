//! Output formatting and display system
//!
//! Formatters turn probe reports and the final summary into text; the
//! factory picks the implementation from the color and verbosity settings.

mod colored;
mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};

use crate::types::DisplayMode;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and verbosity
    pub fn create_formatter(enable_color: bool, display_mode: DisplayMode) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            display_mode,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeOutcome, ProbeReport};
    use crate::stats::RunningStats;

    #[test]
    fn test_factory_respects_display_mode() {
        let formatter = OutputFormatterFactory::create_formatter(false, DisplayMode::Quiet);
        let stats = RunningStats::new();
        let line = formatter.format_probe_report(
            &ProbeReport {
                sequence: 1,
                outcome: ProbeOutcome::Success { rtt_ms: 1.0 },
                recorded: true,
                remaining_skip: 0,
            },
            "127.0.0.1".parse().unwrap(),
            &stats,
        );
        assert!(line.is_none());
    }
}
