//! Shape Catalog - Entry Point
//!
//! This is the main entry point for the shape-catalog binary.
//! It sets up logging, parses arguments, and runs the selected section.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shape_catalog::demo::clock::{SystemClock, run_clock};
use shape_catalog::demo::{self, DemoConfig};
use shape_catalog::{OutputFormat, Pi, ShapeSpec};

/// Shape catalog and demo driver.
#[derive(Parser, Debug)]
#[command(name = "shape-catalog")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report and dispose a shape catalog.
    Shapes {
        /// Shape as kind:dims, e.g. rectangle:5x6 or circle:4. Repeatable.
        #[arg(short, long = "shape", value_name = "SPEC")]
        shapes: Vec<ShapeSpec>,

        /// π approximation for circles.
        #[arg(long, value_enum, default_value_t = Pi::Legacy)]
        pi: Pi,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the current date and time repeatedly.
    Clock {
        /// Number of timestamps to print.
        #[arg(short, long, default_value_t = 10)]
        ticks: u32,

        /// Pause after each timestamp, in milliseconds.
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },

    /// Run every demo section (default).
    Demo {
        /// Number of factorial lines.
        #[arg(long, default_value_t = DemoConfig::default().factorials)]
        factorials: u32,

        /// Pause after each factorial line, in milliseconds.
        #[arg(long, default_value_t = default_delay_ms())]
        delay_ms: u64,

        /// π approximation for circles.
        #[arg(long, value_enum, default_value_t = DemoConfig::default().pi)]
        pi: Pi,
    },
}

impl Command {
    /// The `demo` command with every setting at its default.
    fn default_demo() -> Self {
        let config = DemoConfig::default();
        Command::Demo {
            factorials: config.factorials,
            delay_ms: default_delay_ms(),
            pi: config.pi,
        }
    }
}

/// Default factorial delay in whole milliseconds.
fn default_delay_ms() -> u64 {
    u64::try_from(DemoConfig::default().delay.as_millis()).unwrap_or(u64::MAX)
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level, json: bool) -> Result<()> {
    // Create an env filter that respects RUST_LOG but has a default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shape_catalog={level}")));

    // Logs go to stderr; stdout carries only the report
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(filter);
    let initialized = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.with_ansi(true)).try_init()
    };
    initialized.context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Main entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.parse_log_level()?;
    init_tracing(log_level, args.log_json)?;

    let mut stdout = std::io::stdout();
    let command = args.command.unwrap_or_else(Command::default_demo);

    match command {
        Command::Shapes { shapes, pi, format } => {
            let shapes = if shapes.is_empty() {
                ShapeSpec::REFERENCE.to_vec()
            } else {
                shapes
            };
            info!(count = shapes.len(), ?pi, ?format, "running shape catalog");
            demo::run_catalog(&mut stdout, &shapes, pi, format)
                .context("shape catalog failed")?;
        }
        Command::Clock { ticks, interval_ms } => {
            info!(ticks, interval_ms, "running clock");
            run_clock(
                &mut stdout,
                &SystemClock,
                ticks,
                Duration::from_millis(interval_ms),
            )
            .await
            .context("clock failed")?;
        }
        Command::Demo {
            factorials,
            delay_ms,
            pi,
        } => {
            let config = DemoConfig {
                factorials,
                delay: Duration::from_millis(delay_ms),
                pi,
                ..DemoConfig::default()
            };
            demo::run_demo(&mut stdout, &SystemClock, &config)
                .await
                .context("demo failed")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_log_level() {
        let args = Args {
            log_level: "debug".to_string(),
            log_json: false,
            command: None,
        };
        assert_eq!(args.parse_log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_args_parse_shapes_command() {
        let args = Args::try_parse_from([
            "shape-catalog",
            "shapes",
            "--shape",
            "circle:2",
            "-s",
            "rect:1x3",
            "--pi",
            "exact",
            "--format",
            "json",
        ])
        .unwrap();
        match args.command {
            Some(Command::Shapes { shapes, pi, format }) => {
                assert_eq!(
                    shapes,
                    vec![
                        ShapeSpec::Circle { radius: 2.0 },
                        ShapeSpec::Rectangle {
                            length: 1.0,
                            width: 3.0
                        }
                    ]
                );
                assert_eq!(pi, Pi::Exact);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("expected shapes command, got {other:?}"),
        }
    }

    #[test]
    fn test_args_reject_bad_shape() {
        assert!(Args::try_parse_from(["shape-catalog", "shapes", "-s", "hexagon:1"]).is_err());
    }

    #[test]
    fn test_default_demo_matches_demo_config() {
        let config = DemoConfig::default();
        let parsed = Args::try_parse_from(["shape-catalog", "demo"]).unwrap();
        for command in [Command::default_demo(), parsed.command.unwrap()] {
            match command {
                Command::Demo {
                    factorials,
                    delay_ms,
                    pi,
                } => {
                    assert_eq!(factorials, config.factorials);
                    assert_eq!(Duration::from_millis(delay_ms), config.delay);
                    assert_eq!(pi, config.pi);
                }
                other => panic!("expected demo command, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_args_default_to_demo() {
        let args = Args::try_parse_from(["shape-catalog"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.log_level, "warn");
    }
}
