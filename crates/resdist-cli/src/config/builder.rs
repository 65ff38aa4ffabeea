use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, InputSource};
use crate::cli::{Cli, StructureSource};
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use resdist::engine::config::{MassPolicy, ProximityConfigBuilder};
use std::path::PathBuf;
use tracing::debug;

/// Location of the implicit configuration file, `<config_dir>/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "resdist", "resdist").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Merges defaults, the configuration file, `--set` overrides and CLI flags.
///
/// An explicit `--config` must exist; the implicit `default_path` is only read
/// when a file is actually there.
pub fn build_config(args: &Cli, default_path: Option<PathBuf>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match (&args.config, default_path) {
        (Some(path), _) => FileConfig::from_file(path)?,
        (None, Some(path)) if path.is_file() => {
            debug!("Using configuration file {:?}", &path);
            FileConfig::from_file(&path)?
        }
        _ => FileConfig::default(),
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let analysis = file_config.analysis.take().unwrap_or_default();
    let cutoff = args
        .cutoff
        .or(analysis.cutoff)
        .unwrap_or(defaults.cutoff);
    let mass_fallback = match (
        args.mass_fallback.mass_fallback,
        args.mass_fallback.no_mass_fallback,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => analysis.mass_fallback.unwrap_or(defaults.mass_fallback),
    };
    let mass_policy = if mass_fallback {
        MassPolicy::GeometricFallback
    } else {
        MassPolicy::Strict
    };

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        PathBuf::from(
            file_config
                .output
                .take()
                .and_then(|o| o.directory)
                .unwrap_or(defaults.output_directory),
        )
    });

    let base_url = file_config
        .retrieval
        .take()
        .and_then(|r| r.base_url)
        .unwrap_or(defaults.base_url);

    let core_config = ProximityConfigBuilder::new()
        .cutoff(cutoff)
        .mass_policy(mass_policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        source: resolve_source(&args.source)?,
        output_dir,
        base_url,
        core_config,
    })
}

fn resolve_source(source: &StructureSource) -> Result<InputSource> {
    match (&source.pdb_code, &source.pdb_file) {
        (Some(code), None) => Ok(InputSource::PdbCode(code.clone())),
        (None, Some(path)) => Ok(InputSource::PdbFile(path.clone())),
        _ => Err(CliError::Argument(
            "Exactly one of --pdb-code or --pdb-file must be given.".to_string(),
        )),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "analysis.cutoff" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .cutoff = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "analysis.mass-fallback" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .mass_fallback = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "output.directory" => {
                config.output.get_or_insert_with(Default::default).directory =
                    Some(value_str.to_string());
            }
            "retrieval.base-url" => {
                config.retrieval.get_or_insert_with(Default::default).base_url =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
