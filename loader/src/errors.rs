use flashdeck_core::DatasetError;
use thiserror::Error;

/// Why a dataset could not be loaded.
///
/// `Fetch`, `Status` and `Read` are transport failures; `InvalidDataset`
/// means the bytes arrived but are not a usable dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("Read error: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] DatasetError),
}

impl LoadError {
    pub fn is_transport(&self) -> bool {
        !matches!(self, LoadError::InvalidDataset(_))
    }
}
