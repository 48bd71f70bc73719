pub mod file;
pub mod remote;
pub mod util;

mod errors;
pub use errors::LoadError;

pub use file::read_file;
pub use remote::fetch;
pub use util::DEFAULT_DATASET_NAME;

use flashdeck_core::Dataset;
use std::fmt;
use std::path::PathBuf;

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Fetched over HTTP(S).
    Remote(String),
    /// A file picked by the user.
    File(PathBuf),
}

impl DatasetSource {
    /// Load from this source. File sources are read synchronously.
    pub async fn load(&self) -> Result<Dataset, LoadError> {
        match self {
            DatasetSource::Remote(url) => fetch(url).await,
            DatasetSource::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Remote(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
