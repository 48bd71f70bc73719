use crate::LoadError;
use crate::util::{http_client, strip_bom};
use flashdeck_core::Dataset;
use log::{info, warn};

/// Download and validate a dataset from `url`.
pub async fn fetch(url: &str) -> Result<Dataset, LoadError> {
    info!("[Loader] Fetching dataset from {}", url);
    let client = http_client();
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        warn!("[Loader] {} answered {}", url, res.status());
        return Err(LoadError::Status(res.status()));
    }

    let body = res.text().await?;
    let dataset = Dataset::from_json(strip_bom(&body))?;
    info!("[Loader] Fetched {} questions", dataset.len());
    Ok(dataset)
}
