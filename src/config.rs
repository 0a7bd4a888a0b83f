use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Raw series records (CSV) consumed by the feature builder
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Persisted similarity matrix (CSV)
    #[serde(default = "default_matrix_path")]
    pub matrix_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned when a caller does not ask for a count
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Declared content-rating order, comma separated. Sorted observed values are used when unset.
    #[serde(default)]
    pub rating_categories: Option<Vec<String>>,

    /// Build the matrix from `dataset_path` when `matrix_path` does not exist yet
    #[serde(default)]
    pub build_on_start: bool,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("korean_drama.csv")
}

fn default_matrix_path() -> PathBuf {
    PathBuf::from("cosine_similarity_matrix.csv")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_count() -> usize {
    2
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit set of variables, ignoring the process environment
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.default_count == 0 {
            anyhow::bail!("DEFAULT_COUNT must be at least 1");
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
