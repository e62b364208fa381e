use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "heatmap_tui",
    version,
    about = "Global land-surface temperature heatmap"
)]
pub struct CliArgs {
    /// Print a dataset summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the dataset URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Legend sample mode: quantiles or verbatim
    #[arg(long, value_name = "MODE")]
    pub legend: Option<String>,
}

impl CliArgs {
    /// Flags win over `.env` and the inherited environment.
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.url {
            std::env::set_var("HEATMAP_DATA_URL", url);
        }
        if let Some(path) = &self.file {
            std::env::set_var("HEATMAP_DATA_FILE", path);
        }
        if let Some(mode) = &self.legend {
            std::env::set_var("HEATMAP_LEGEND", mode);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn wants_summary(&self) -> bool {
        self.headless || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn parses_all_flags() {
        let args = CliArgs::parse_from([
            "heatmap_tui",
            "--json",
            "--debug",
            "--file",
            "data.json",
            "--legend",
            "verbatim",
        ]);

        assert!(args.json);
        assert!(args.debug);
        assert!(args.wants_summary());
        assert_eq!(args.file.as_deref(), Some("data.json"));
        assert_eq!(args.legend.as_deref(), Some("verbatim"));
        assert!(args.url.is_none());
    }

    #[test]
    fn interactive_by_default() {
        let args = CliArgs::parse_from(["heatmap_tui"]);
        assert!(!args.wants_summary());
    }
}
