use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "resdist contributors",
    version,
    about = "resdist - Pairwise residue proximity analysis for protein structures. Computes center-of-mass, center-of-geometry and nearest-atom distances for every ordered residue pair.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub source: StructureSource,

    /// Distance cutoff below which a residue pair is counted.
    /// Overrides `analysis.cutoff` from the config file (default: 6).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub cutoff: Option<f64>,

    /// Directory the CSV table is written to (default: the current directory).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `analysis.mass-fallback` from the config file.
    #[command(flatten)]
    pub mass_fallback: MassFallback,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S analysis.cutoff=4.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

/// Where the structure comes from: exactly one of a PDB id or a local file.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct StructureSource {
    /// Four-character PDB id to download (e.g. 1CRN).
    #[arg(long, value_name = "ID")]
    pub pdb_code: Option<String>,

    /// Path to a local PDB file (plain or gzip-compressed).
    #[arg(long, value_name = "PATH")]
    pub pdb_file: Option<PathBuf>,
}

/// A group to handle mutually exclusive flags for the unknown-mass policy.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct MassFallback {
    /// Use the center of geometry for residues whose atomic masses are unknown
    /// instead of failing.
    #[arg(long)]
    pub mass_fallback: bool,
    /// Fail on residues whose atomic masses are unknown, even if the config file
    /// enables the fallback.
    #[arg(long)]
    pub no_mass_fallback: bool,
}
