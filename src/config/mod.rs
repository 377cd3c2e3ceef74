//! Configuration loading and validation warnings
//!
//! Builds the immutable run `Config` from parsed CLI flags plus the resolved
//! target address, and surfaces non-fatal policy oddities as warnings before
//! the run starts.

use crate::cli::Cli;
use crate::models::Config;
use crate::types::Result;
use std::net::IpAddr;

/// Build and validate the run configuration
///
/// Resolution happens before this point; the core never sees a hostname
/// except as a display label.
pub fn load_config(cli: &Cli, target_ip: IpAddr) -> Result<Config> {
    let config = Config {
        hostname: cli.host.clone(),
        target_ip,
        target_port: cli.port,
        probe_count: cli.count,
        interval_seconds: cli.interval,
        timeout_seconds: cli.timeout,
        skip_count: cli.skip,
        display_mode: cli.display_mode(),
        enable_color: cli.enable_color(),
        json: cli.json,
        debug: cli.debug,
    };

    config.validate()?;
    Ok(config)
}

/// Non-fatal configuration warning shown before the run
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    message: String,
}

impl ConfigWarning {
    fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Format the warning for console display
    pub fn format(&self, enable_color: bool) -> String {
        if enable_color {
            use colored::Colorize;
            format!("{} {}", "warning:".yellow().bold(), self.message)
        } else {
            format!("warning: {}", self.message)
        }
    }
}

/// Check a valid configuration for policy that is legal but probably
/// not what the operator wanted
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.probe_count > 0 && config.skip_count >= config.probe_count {
        warnings.push(ConfigWarning::new(format!(
            "all {} pings fall inside the skip window; statistics will be empty",
            config.probe_count
        )));
    }

    if config.interval_seconds == 0.0 && config.probe_count == 0 {
        warnings.push(ConfigWarning::new(
            "zero interval with unlimited count probes in a tight loop",
        ));
    }

    if config.timeout_seconds > 30.0 {
        warnings.push(ConfigWarning::new(format!(
            "timeout of {}s is unusually long; unreachable hosts will stall each ping for that duration",
            config.timeout_seconds
        )));
    }

    warnings
}

/// One-line-per-field configuration summary for debug output
pub fn display_config_summary(config: &Config) -> String {
    format!(
        "  Target: {} ({}) port {}\n  Count: {}\n  Interval: {}s\n  Timeout: {}s\n  Skip: {}\n  Display: {:?}\n  Color: {}\n  JSON: {}",
        config.hostname,
        config.target_ip,
        config.target_port,
        if config.probe_count == 0 {
            "unlimited".to_string()
        } else {
            config.probe_count.to_string()
        },
        config.interval_seconds,
        config.timeout_seconds,
        config.skip_count,
        config.display_mode,
        config.enable_color,
        config.json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn ip() -> IpAddr {
        "127.0.0.1".parse().unwrap()
    }

    #[test]
    fn test_load_config_from_cli() {
        let config = load_config(
            &cli(&["tcpping", "example.com", "-p", "80", "-c", "5", "-s", "1"]),
            ip(),
        )
        .unwrap();

        assert_eq!(config.hostname, "example.com");
        assert_eq!(config.target_port, 80);
        assert_eq!(config.probe_count, 5);
        assert_eq!(config.skip_count, 1);
        assert_eq!(config.target_ip, ip());
    }

    #[test]
    fn test_load_config_rejects_bad_timeout() {
        // Parser-level bounds do not cover floats, so Config::validate must
        let mut parsed = cli(&["tcpping", "example.com"]);
        parsed.timeout = 0.0;
        assert!(load_config(&parsed, ip()).is_err());
    }

    #[test]
    fn test_warning_when_skip_covers_whole_run() {
        let config = load_config(&cli(&["tcpping", "h", "-c", "3", "-s", "3"]), ip()).unwrap();
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].format(false).contains("skip window"));
    }

    #[test]
    fn test_no_warnings_for_plain_run() {
        let config = load_config(&cli(&["tcpping", "h", "-c", "5"]), ip()).unwrap();
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_tight_loop_warning() {
        let config = load_config(&cli(&["tcpping", "h", "-i", "0"]), ip()).unwrap();
        let warnings = validate_config(&config);
        assert!(warnings
            .iter()
            .any(|w| w.format(false).contains("tight loop")));
    }

    #[test]
    fn test_config_summary_mentions_unlimited_count() {
        let config = load_config(&cli(&["tcpping", "h"]), ip()).unwrap();
        let summary = display_config_summary(&config);
        assert!(summary.contains("unlimited"));
        assert!(summary.contains("port 443"));
    }
}
