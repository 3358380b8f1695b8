// Prices the configured maturity ladder, draws the value curves and prints
// the first curve as a table.
//
// Usage:
//     bs-curves [CONFIG.toml]
//
// Without an argument the built-in at-the-money setup is used. Set RUST_LOG
// (e.g. RUST_LOG=debug) for per-curve logging on stderr.

use std::process::ExitCode;

use anyhow::Result;
use bs_curves::{price_curves, render_svg, write_csv_file, ChartOptions, CurveConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.toml]", args[0]);
        return ExitCode::from(2);
    }

    match run(args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            tracing::info!(path, "loading configuration");
            CurveConfig::load(path)?
        }
        None => CurveConfig::at_the_money(),
    };

    let curves = price_curves(&config)?;

    if let Some(first) = curves.first() {
        println!("maturity {}", first.label);
        println!("{:>10} {:>14}", "spot", "value");
        for &(spot, value) in &first.curve.points {
            println!("{:>10.2} {:>14.6}", spot, value);
        }
    }

    if config.output.svg {
        let svg_path = &config.output.svg_path;
        render_svg(&curves, &ChartOptions::from(&config.output), svg_path)?;
        tracing::info!(path = %svg_path.display(), "chart written");
    }

    if let Some(csv_path) = &config.output.csv_path {
        write_csv_file(&curves, csv_path)?;
        tracing::info!(path = %csv_path.display(), "csv written");
    }

    Ok(())
}
