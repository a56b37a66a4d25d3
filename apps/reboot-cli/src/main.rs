//! Reactor reboot command-line tool.
//!
//! Reads an ordered list of toggle steps, applies them to the cuboid engine
//! and prints the number of lit cells.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p reboot-cli -- [OPTIONS] [FILE]
//! ```
//!
//! ## Options
//!
//! - `--init`: Only apply steps inside the initialization region (-50..50)
//! - `--json`: Read a JSON step array instead of text lines
//! - `--verify`: Check the disjointness invariant after every step
//! - `--parallel-threshold <N>`: Region size at which slicing goes parallel (default: 512)
//! - `--report`: Print step and cuboid counts along with the volume
//! - `-h, --help`: Print help message
//!
//! ## Examples
//!
//! ```bash
//! # Full reboot
//! cargo run -p reboot-cli -- input.txt
//!
//! # Initialization phase only, from stdin
//! cat input.txt | cargo run -p reboot-cli -- --init
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod args;

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use reboot_region::RebootSequencer;
use reboot_steps::initialization_steps;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{parse_args, CliConfig, Command};

fn main() -> anyhow::Result<()> {
    let config = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Run(config) => config,
    };

    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&config)
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let input = read_input(config.input.as_deref())?;
    let mut steps = config
        .format
        .parse(&input)
        .context("failed to read reboot steps")?;
    if config.init_only {
        steps = initialization_steps(steps).collect();
    }
    info!(steps = steps.len(), init_only = config.init_only, "loaded steps");

    let start = Instant::now();
    let report = RebootSequencer::new(config.sequencer.clone())
        .run_report(&steps)
        .context("reboot failed")?;
    info!(
        cuboids = report.cuboids,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "reboot finished"
    );

    if config.report {
        println!("steps:   {}", report.steps);
        println!("cuboids: {}", report.cuboids);
        println!("volume:  {}", report.volume);
    } else {
        println!("{}", report.volume);
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn print_help() {
    eprintln!(
        "Reactor reboot: count lit cells after a sequence of toggle steps

USAGE:
    reboot [OPTIONS] [FILE]

    Reads steps from FILE, or from stdin when FILE is absent or \"-\".
    Each line looks like: on x=10..12,y=10..12,z=10..12

OPTIONS:
    --init                      Only apply steps inside x,y,z = -50..50
    --json                      Input is a JSON array of steps
    --verify                    Check that no two cuboids overlap after every step
    --parallel-threshold <N>    Region size at which slicing goes parallel (default: 512)
    --report                    Print step and cuboid counts along with the volume
    -h, --help                  Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                    Set log level (e.g., info, debug, trace)"
    );
}
