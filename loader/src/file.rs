use crate::LoadError;
use crate::util::strip_bom;
use flashdeck_core::Dataset;
use log::info;
use std::path::Path;

/// Read and validate a dataset file. Blocks until the whole file is read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    info!("[Loader] Reading dataset from {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    let dataset = Dataset::from_json(strip_bom(&contents))?;
    info!("[Loader] Read {} questions", dataset.len());
    Ok(dataset)
}
