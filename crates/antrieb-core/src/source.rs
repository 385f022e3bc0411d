// File: crates/antrieb-core/src/source.rs
// Summary: Where the CSV comes from (HTTP URL or local file) and how it is fetched.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;

/// Published drive-type counts for the canton of Zurich.
pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/CGRBZH/zhiz2020_vis/master/zhizh_antrieb.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` / `https://` prefixes select a URL, anything else a path.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Fetch the raw CSV text. One attempt, no retry.
    pub fn fetch_text(&self) -> Result<String> {
        match self {
            Self::Url(url) => {
                info!(%url, "fetching dataset");
                let response = reqwest::blocking::get(url)?.error_for_status()?;
                Ok(response.text()?)
            }
            Self::File(path) => {
                info!(path = %path.display(), "reading dataset");
                Ok(std::fs::read_to_string(path)?)
            }
        }
    }

    pub fn load(&self) -> Result<Dataset> {
        let text = self.fetch_text()?;
        let dataset = Dataset::from_csv_str(&text)?;
        info!(rows = dataset.len(), series = dataset.series.len(), "dataset loaded");
        Ok(dataset)
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl From<&Path> for DataSource {
    fn from(p: &Path) -> Self {
        Self::File(p.to_path_buf())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(u) => f.write_str(u),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}
