//! Effective configuration with provenance
//!
//! The effective config is the built-in defaults with every overlay file
//! applied in order, plus a record of where each layer came from.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::Config;
use crate::overlay::{apply_overlay, parse_overlay, to_overlay_view, OverlayView, ParseFailure};

/// Origin of a configuration layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    /// Compiled-in defaults
    Builtin,
    /// A base configuration supplied by the caller
    Base,
    File,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this layer
    pub origin: ConfigOrigin,

    /// File path (None for builtin and base layers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin and base layers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Configuration after all overlays, with the layers that produced it
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// The merged configuration
    pub config: Config,

    /// Contributing layers in application order
    pub sources: Vec<ConfigSource>,

    /// When this config was computed
    pub created_at: DateTime<Utc>,
}

impl EffectiveConfig {
    /// Built-in defaults followed by each overlay file in order.
    pub fn build(overlay_paths: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::layer(Config::default(), ConfigOrigin::Builtin, overlay_paths)
    }

    /// Like [`build`](Self::build) but starting from a caller-provided base,
    /// recorded as [`ConfigOrigin::Base`].
    pub fn from_base(base: Config, overlay_paths: &[PathBuf]) -> Result<Self, ConfigError> {
        Self::layer(base, ConfigOrigin::Base, overlay_paths)
    }

    fn layer(
        base: Config,
        base_origin: ConfigOrigin,
        overlay_paths: &[PathBuf],
    ) -> Result<Self, ConfigError> {
        let mut config = base;
        let mut sources = vec![ConfigSource {
            origin: base_origin,
            path: None,
            digest: None,
        }];

        for path in overlay_paths {
            let (overlay, digest) = Self::load_overlay_file(path)?;
            config = apply_overlay(&config, &overlay);
            info!(path = %path.display(), %digest, "applied configuration overlay");
            sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(path.to_string_lossy().to_string()),
                digest: Some(digest),
            });
        }

        debug!(layers = sources.len(), "effective configuration ready");

        Ok(Self {
            config,
            sources,
            created_at: Utc::now(),
        })
    }

    /// Read and parse one overlay document, returning it with its digest
    fn load_overlay_file(path: &Path) -> Result<(OverlayView, String), ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let overlay = parse_overlay(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok((overlay, digest))
    }

    /// Export the effective configuration as an overlay view
    pub fn overlay(&self) -> OverlayView {
        to_overlay_view(&self.config)
    }

    /// Render the layer list as pretty JSON
    pub fn provenance_json(&self) -> Result<String, ConfigError> {
        let doc = serde_json::json!({
            "created_at": self.created_at,
            "sources": self.sources,
        });
        serde_json::to_string_pretty(&doc).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    #[error("serialization failed: {0}")]
    Serialize(String),
}
