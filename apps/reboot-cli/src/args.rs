//! Command-line option parsing.

use std::path::PathBuf;

use anyhow::{bail, Context};
use reboot_region::SequencerConfig;
use reboot_steps::StepFormat;

/// Options for a single run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Step file; stdin when `None`.
    pub input: Option<PathBuf>,
    /// Input format.
    pub format: StepFormat,
    /// Keep only steps inside the initialization region.
    pub init_only: bool,
    /// Print step and cuboid counts along with the volume.
    pub report: bool,
    /// Engine settings.
    pub sequencer: SequencerConfig,
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliConfig),
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CliConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--init" => config.init_only = true,
            "--json" => config.format = StepFormat::Json,
            "--verify" => config.sequencer.verify_disjoint = true,
            "--report" => config.report = true,
            "--parallel-threshold" => {
                let value = args
                    .next()
                    .context("--parallel-threshold requires a value")?;
                config.sequencer.parallel_threshold = value
                    .parse()
                    .with_context(|| format!("invalid --parallel-threshold {value:?}"))?;
            }
            "-" => config.input = None,
            flag if flag.starts_with('-') => bail!("unknown option {flag:?} (see --help)"),
            path => {
                if config.input.is_some() {
                    bail!("more than one input file given");
                }
                config.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Run(config))
}
