//! Dataset loading functionality

use super::FilmDataset;
use anyhow::{bail, Result};
use tracing::{info, warn};

pub fn load_dataset<P: AsRef<std::path::Path>>(path: P) -> Result<FilmDataset> {
    let path = path.as_ref();
    info!("Loading film dataset from {}...", path.display());
    let build_result = FilmDataset::build(path);
    let problems = build_result.problems;
    let dataset = build_result.dataset;

    if !problems.is_empty() {
        warn!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }
    match (&dataset, problems.is_empty()) {
        (Some(_), true) => info!("Dataset checked, no issues found."),
        (Some(_), false) => info!(
            "Dataset was built, but check the {} non-fatal issues above.",
            problems.len()
        ),
        (None, _) => {
            info!(
                "Check the {} problems above, the dataset could not be loaded.",
                problems.len()
            )
        }
    }
    if let Some(dataset) = dataset {
        info!(
            "Dataset has {} films (general info {})",
            dataset.films_count(),
            if dataset.general_info().is_some() {
                "present"
            } else {
                "missing"
            }
        );
        return Ok(dataset);
    }

    bail!("Could not load film dataset from {}", path.display());
}
