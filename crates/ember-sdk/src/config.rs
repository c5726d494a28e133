// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration, loaded from JSON.

use ember_core::EventCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Settings for one engine run.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title, also used to name the run in logs.
    pub title: String,
    /// Initial window width in physical pixels.
    pub width: u32,
    /// Initial window height in physical pixels.
    pub height: u32,
    /// Stop after this many frames. `None` runs until the window is closed.
    pub max_frames: Option<u64>,
    /// Event categories forwarded to the application, by name (e.g. `"Keyboard"`).
    /// Empty forwards everything.
    pub event_filter: Vec<String>,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Ember Engine".to_string(),
            width: 1280,
            height: 720,
            max_frames: None,
            event_filter: Vec::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Parse)
    }

    /// Resolves [`event_filter`](Self::event_filter) into a category mask.
    ///
    /// Returns `None` when the filter is empty, meaning "forward everything".
    pub fn category_filter(&self) -> Result<Option<EventCategory>, ConfigError> {
        if self.event_filter.is_empty() {
            return Ok(None);
        }

        let mut mask = EventCategory::EMPTY;
        for name in &self.event_filter {
            let category = EventCategory::from_name(name)
                .ok_or_else(|| ConfigError::UnknownCategory(name.clone()))?;
            mask.insert(category);
        }
        Ok(Some(mask))
    }
}

/// An error raised while loading or interpreting an [`EngineConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        /// The path that failed to load.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The JSON was malformed or did not match the expected shape.
    Parse(serde_json::Error),
    /// `event_filter` names a category that does not exist.
    UnknownCategory(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config file '{path}': {source}")
            }
            ConfigError::Parse(err) => write!(f, "Invalid engine configuration: {err}"),
            ConfigError::UnknownCategory(name) => {
                write!(f, "Unknown event category '{name}' in event_filter")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::UnknownCategory(_) => None,
        }
    }
}
