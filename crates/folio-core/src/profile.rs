//! Hero profile (hero.toml)
//!
//! Text shown around the typewriter plus the typewriter settings themselves.
//! Every field is optional in the file; missing ones keep the built-in hero.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cycler::CyclerConfig;

/// Directory under the home directory holding folio configuration
pub const CONFIG_DIR: &str = ".folio";
/// Profile file name inside [`CONFIG_DIR`]
pub const PROFILE_FILE: &str = "hero.toml";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("hero profile not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read hero profile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hero profile {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize hero profile: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Hero section content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroProfile {
    /// Small monospace line above the heading
    pub greeting: String,
    /// Name in the "I'm ..." heading
    pub name: String,
    /// One-sentence pitch under the typewriter
    pub tagline: String,
    /// Phrases cycled under the heading
    pub typewriter: CyclerConfig,
}

impl Default for HeroProfile {
    fn default() -> Self {
        Self {
            greeting: "<Hello World />".to_string(),
            name: "Arushi Rathore".to_string(),
            tagline: "Building scalable, performant applications with Java, Spring Boot, \
                      React, and modern web technologies."
                .to_string(),
            typewriter: CyclerConfig::hero(),
        }
    }
}

impl HeroProfile {
    /// `~/.folio/hero.toml`, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(PROFILE_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProfileError::NotFound(path.to_path_buf())
            } else {
                ProfileError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::from_toml_str(&content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicit path (which must exist), else the default path when
    /// present, else the built-in profile.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ProfileError> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "Loading hero profile");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading hero profile");
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No hero profile found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, ProfileError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
