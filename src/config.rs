use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::convert::{CaveInput, ZeroReference};
use crate::frcs::{PlotFile, SurveyFile, TripSummaryFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A conversion run: which parsed files make up each cave.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub caves: BTreeMap<String, CaveConfig>,
    /// Relative input paths resolve against this directory.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaveConfig {
    pub survey: PathBuf,
    #[serde(default)]
    pub plot: Option<PathBuf>,
    #[serde(default)]
    pub summaries: Option<PathBuf>,
    #[serde(default)]
    pub survey_notes_file_prefix: Option<String>,
    #[serde(default)]
    pub utm_zone: Option<i32>,
    #[serde(default)]
    pub zero_reference: Option<ZeroReference>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, base_dir)
    }

    pub fn parse(yaml: &str, base_dir: PathBuf) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        config.base_dir = base_dir;
        Ok(config)
    }

    /// Reads every cave's parsed input files.
    pub fn load_inputs(&self) -> Result<BTreeMap<String, CaveInput>, ConfigError> {
        self.caves
            .iter()
            .map(|(name, cave)| self.load_cave(cave).map(|input| (name.clone(), input)))
            .collect()
    }

    fn load_cave(&self, cave: &CaveConfig) -> Result<CaveInput, ConfigError> {
        let survey: SurveyFile = read_json(&self.resolve(&cave.survey))?;
        let plot: Option<PlotFile> = cave
            .plot
            .as_ref()
            .map(|p| read_json(&self.resolve(p)))
            .transpose()?;
        let summaries: Option<TripSummaryFile> = cave
            .summaries
            .as_ref()
            .map(|p| read_json(&self.resolve(p)))
            .transpose()?;

        Ok(CaveInput {
            survey,
            plot,
            summaries,
            survey_notes_file_prefix: cave.survey_notes_file_prefix.clone(),
            utm_zone: cave.utm_zone,
            zero_reference: cave.zero_reference,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    log::debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}
