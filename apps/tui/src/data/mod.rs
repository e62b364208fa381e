use std::path::PathBuf;

use heatmap_core::{Dataset, DatasetError};
use thiserror::Error;

use crate::config::DataSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to download dataset: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Fetch and validate the dataset. One attempt, no timeout.
pub async fn load_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    tracing::debug!(%source, "loading dataset");
    let body = match source {
        DataSource::Url(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            response.text().await?
        }
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
    };

    let dataset = Dataset::from_json_str(&body)?;
    tracing::debug!(points = dataset.monthly_variance.len(), "dataset loaded");
    Ok(dataset)
}
