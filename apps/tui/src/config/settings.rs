use std::env;
use std::fmt;
use std::path::PathBuf;

use dotenv::dotenv;
use heatmap_core::{LegendMode, DATASET_URL};

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Merge `.env` into the process environment without overriding variables
/// that are already set.
pub fn load_dotenv() {
    dotenv().ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: DataSource,
    pub legend_mode: LegendMode,
    pub debug: bool,
}

impl AppConfig {
    /// Read the `HEATMAP_*` variables. Call [`load_dotenv`] first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let source = non_empty("HEATMAP_DATA_FILE").map_or_else(
            || DataSource::Url(non_empty("HEATMAP_DATA_URL").unwrap_or_else(|| DATASET_URL.to_string())),
            |path| DataSource::File(PathBuf::from(path)),
        );

        let legend_mode = match non_empty("HEATMAP_LEGEND") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring HEATMAP_LEGEND");
                LegendMode::default()
            }),
            None => LegendMode::default(),
        };

        Self {
            source,
            legend_mode,
            debug: lookup("DEBUG").is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DataSource};
    use heatmap_core::{LegendMode, DATASET_URL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_published_dataset() {
        let config = config(&[]);
        assert_eq!(config.source, DataSource::Url(DATASET_URL.to_string()));
        assert_eq!(config.legend_mode, LegendMode::Quantiles);
        assert!(!config.debug);
    }

    #[test]
    fn file_takes_precedence_over_url() {
        let config = config(&[
            ("HEATMAP_DATA_URL", "http://localhost/data.json"),
            ("HEATMAP_DATA_FILE", "fixtures/data.json"),
            ("DEBUG", "1"),
        ]);
        assert_eq!(
            config.source,
            DataSource::File(PathBuf::from("fixtures/data.json"))
        );
        assert!(config.debug);
    }

    #[test]
    fn invalid_legend_mode_falls_back() {
        assert_eq!(
            config(&[("HEATMAP_LEGEND", "verbatim")]).legend_mode,
            LegendMode::Verbatim
        );
        assert_eq!(
            config(&[("HEATMAP_LEGEND", "rainbow")]).legend_mode,
            LegendMode::Quantiles
        );
    }
}
