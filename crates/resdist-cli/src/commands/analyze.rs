use crate::config::{AppConfig, InputSource};
use crate::error::{CliError, Result};
use crate::retrieval::Retriever;
use crate::utils::progress::CliProgressHandler;
use resdist::{
    core::io::{pdb::PdbFile, table, traits::StructureFile},
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub async fn run(config: AppConfig, show_progress: bool) -> Result<()> {
    // A downloaded structure must outlive the analysis; its directory goes away on drop.
    let (input_path, _retrieved) = match &config.source {
        InputSource::PdbFile(path) => (path.clone(), None),
        InputSource::PdbCode(code) => {
            let retrieved = Retriever::new(&config.base_url).retrieve(code).await?;
            (retrieved.path().to_path_buf(), Some(retrieved))
        }
    };

    let output_path = output_path(&input_path, &config.output_dir)?;

    info!("Loading input structure from {:?}", &input_path);
    let (system, metadata) =
        PdbFile::read_from_path(&input_path).map_err(|e| CliError::FileParsing {
            path: input_path.clone(),
            source: e,
        })?;
    if metadata.model_count > 1 {
        warn!(
            models = metadata.model_count,
            "Structure has several models; residues of every model enter the table."
        );
    }
    if metadata.discarded_alt_locs > 0 {
        info!(
            discarded = metadata.discarded_alt_locs,
            "Kept the highest-occupancy alternate location of each atom."
        );
    }

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the proximity workflow...");
    let report = tokio::task::block_in_place(|| {
        workflows::proximity::run(&system, &config.core_config, &reporter)
    })?;

    info!(
        "Writing {} pair record(s) for {} residue(s) to {:?}",
        report.records.len(),
        report.residue_count,
        &output_path
    );
    table::write_rows_to_path(&report.records, &output_path)?;

    println!("{}", report.summary);
    Ok(())
}

/// `<output_dir>/<input file name>.csv`, e.g. `1abc.pdb` becomes `1abc.pdb.csv`.
fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input.file_name().ok_or_else(|| {
        CliError::Argument(format!(
            "Input path '{}' does not name a file.",
            input.display()
        ))
    })?;
    let mut name = file_name.to_os_string();
    name.push(".csv");
    Ok(output_dir.join(name))
}
