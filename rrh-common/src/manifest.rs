//! Loading [`ManagedRelease`] objects from manifest files.

use crate::errors::ErrorCode;
use crate::types::ManagedRelease;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("unsupported manifest format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
}

impl ManifestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::ManifestReadError,
            Self::Parse { .. } => ErrorCode::ManifestParseError,
            Self::UnsupportedFormat { .. } => ErrorCode::ManifestUnsupportedFormat,
        }
    }
}

/// Decoder failure for one of the supported encodings.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Manifest encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    /// Format implied by the file extension. No extension means YAML.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(Self::Yaml);
        };
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext.to_string(),
            }),
        }
    }
}

/// Parse a manifest from `content`.
pub fn parse_manifest(
    content: &str,
    format: ManifestFormat,
) -> Result<ManagedRelease, ParseError> {
    let release = match format {
        ManifestFormat::Yaml => serde_yaml_ng::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml::from_str(content)?,
    };
    Ok(release)
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<ManagedRelease, ManifestError> {
    let format = ManifestFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let release = parse_manifest(&content, format).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        format = ?format,
        release = %release.release_identity(),
        "Loaded release manifest"
    );
    Ok(release)
}
