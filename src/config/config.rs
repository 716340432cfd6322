use std::{
    borrow::Cow,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use compio::fs;
use hashlink::LinkedHashMap;
use nstree::CdMode;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

const CONFIG_FILE_NAME: &str = "nstree.yaml";

/// Settings read from the optional YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceConfig {
    pub cd_mode: Option<CdMode>,
    /// Directories created before any command runs.
    pub preload: Vec<String>,
    /// Commands run before the ones given on the command line.
    pub commands: Vec<String>,
}

impl NamespaceConfig {
    /// Reads `path`, or `nstree.yaml` in the working directory when no path
    /// is given. Only the implicit file is allowed to be missing.
    pub async fn read(path: Option<&Path>) -> Result<Self, ConfigCreationError> {
        match path {
            Some(path) => Self::from_path(path.to_path_buf()).await,
            None => match Self::from_path(PathBuf::from(CONFIG_FILE_NAME)).await {
                Err(ConfigCreationError::ReadError { source, .. })
                    if source.kind() == ErrorKind::NotFound =>
                {
                    debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(Self::default())
                }
                other => other,
            },
        }
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, ConfigCreationError> {
        debug!("Reading config file: {}", path.display());
        let bytes = fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    fn parse_cd_mode(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Option<CdMode>, ConfigCreationError> {
        let Some(value) = top_level.get(&Self::key("cd_mode")) else {
            return Ok(None);
        };
        let raw = value.as_str().context(InvalidCdModeSnafu {
            value: format!("{value:?}"),
        })?;
        CdMode::from_str(raw, true)
            .map(Some)
            .map_err(|_| ConfigCreationError::InvalidCdMode {
                value: raw.to_string(),
            })
    }

    fn parse_string_list(
        top_level: &LinkedHashMap<Yaml, Yaml>,
        key: &'static str,
    ) -> Result<Vec<String>, ConfigCreationError> {
        let Some(value) = top_level.get(&Self::key(key)) else {
            return Ok(Vec::new());
        };

        let entries = value
            .as_sequence()
            .context(NotASequenceSnafu { key })?
            .iter()
            .filter_map(|entry| {
                let text = entry.as_str().map(|s| s.to_string());
                if text.is_none() {
                    debug!("Skipping non-string entry in '{}': {:?}", key, entry);
                }
                text
            })
            .collect();

        Ok(entries)
    }

    fn key<'a>(name: &'static str) -> Yaml<'a> {
        Yaml::Value(Scalar::String(Cow::Borrowed(name)))
    }
}

impl TryFrom<&str> for NamespaceConfig {
    type Error = ConfigCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents
            .first()
            .ok_or(ConfigCreationError::MalformedConfig)?;
        let top_level = document
            .as_mapping()
            .ok_or(ConfigCreationError::TopLevelNotMap)?;

        Ok(NamespaceConfig {
            cd_mode: Self::parse_cd_mode(top_level)?,
            preload: Self::parse_string_list(top_level, "preload")?,
            commands: Self::parse_string_list(top_level, "commands")?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigCreationError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Unknown cd_mode '{}', expected 'parent' or 'descend'", value))]
    InvalidCdMode { value: String },
    #[snafu(display("'{}' section should be a list", key))]
    NotASequence { key: String },
}
