//! tcpping - Main CLI Application
//!
//! Measures TCP handshake round-trip latency to a host:port by timing
//! repeated connection attempts and aggregating running statistics.

use clap::Parser;
use std::process;
use tcpping::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config},
    error::{AppError, Result},
    output::OutputFormatterFactory,
    resolver,
    runner::{install_interrupt_handler, CancelSignal, Runner},
    PKG_NAME, VERSION,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue at: https://github.com/tcpping/tcpping/issues");
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        if let Some(build_time) = option_env!("BUILD_TIME") {
            println!("Built: {}", build_time);
        }
        if let Some(commit) = option_env!("GIT_COMMIT") {
            println!("Commit: {}", commit);
        }
        println!("Debug mode enabled");
        println!();
    }

    // Validate CLI arguments before doing any work
    cli.validate().map_err(AppError::validation)?;

    // Resolve the target; the core only ever sees an address
    let target_ip = resolver::resolve_target(&cli.host).await?;

    // Load and validate configuration
    let config = load_config(&cli, target_ip)?;

    if config.debug {
        println!("Configuration loaded successfully:");
        println!("{}", display_config_summary(&config));
        println!();
    }

    // Display validation warnings
    let warnings = validate_config(&config);
    for warning in &warnings {
        eprintln!("{}", warning.format(config.enable_color));
    }

    // Cancellation: ctrl-c / SIGTERM sets a flag the probe loop observes
    // between probes, and wakes the inter-probe sleep early.
    let cancel = CancelSignal::new();
    install_interrupt_handler(cancel.clone());

    let formatter =
        OutputFormatterFactory::create_formatter(config.enable_color, config.display_mode);

    // The JSON summary must stay machine-readable, so the banner is
    // suppressed along with the rest of the text output.
    if !config.json {
        println!(
            "{}",
            formatter.format_banner(&config.hostname, config.target_ip, config.target_port)
        );
    }

    let runner = Runner::new(config.clone(), cancel);
    let summary = runner.run(formatter.as_ref()).await?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", formatter.format_summary(&summary));
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Usage help:");
            eprintln!("  - Run 'tcpping --help' for the full option list");
            eprintln!("  - Port must be 1-65535, timeout must be greater than 0");
        }
        AppError::Resolve(_) => {
            eprintln!();
            eprintln!("Resolution help:");
            eprintln!("  - Check if the hostname is spelled correctly");
            eprintln!("  - Test DNS resolution manually with 'nslookup' or 'dig'");
            eprintln!("  - Try the numeric IP address directly");
        }
        AppError::Socket(_) => {
            eprintln!();
            eprintln!("Socket troubleshooting:");
            eprintln!("  - The process could not create a socket; this is a local problem,");
            eprintln!("    not a statement about the target");
            eprintln!("  - Check the file descriptor limit (ulimit -n) and system load");
        }
        _ => {}
    }
}
