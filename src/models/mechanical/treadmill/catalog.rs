//! Named drivetrain models persisted as JSON.
//!
//! A catalog file is a JSON object keyed by model name. Each record keeps
//! the raw form text, the displayed results at save time, opaque extras and
//! custom-field values:
//!
//! ```json
//! {
//!   "TM-200": {
//!     "motor_power": "1500",
//!     "motor_rpm": "1400",
//!     "motor_pulley_d": "40",
//!     "use_secondary": false,
//!     "sec1": "",
//!     "sec2": "",
//!     "roller_pulley_d": "60",
//!     "roller_diameter": "50",
//!     "belt_kmh": "",
//!     "computed": { "belt_kmh": "8.796", "gear_ratio": "1:1.5", "...": "..." },
//!     "extras": {},
//!     "fields": { "frame": "steel" }
//!   }
//! }
//! ```

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::support::drivetrain::{format_ratio, parse_ratio};

use super::{ResultDisplay, form::FormFields};

/// Conventional catalog file name.
pub const DEFAULT_FILE_NAME: &str = "models.json";

/// Errors that can occur while loading or saving a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read or written.
    #[error("cannot access model catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog file is not a valid catalog.
    #[error("malformed model catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog could not be encoded as JSON.
    #[error("cannot encode model catalog")]
    Encode(#[source] serde_json::Error),

    /// A model name was empty after trimming.
    #[error("model name must not be empty")]
    EmptyName,

    /// No model with this name exists.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

/// One saved model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Raw form text.
    #[serde(flatten)]
    pub inputs: FormFields,

    /// Results as displayed when the model was saved.
    #[serde(default)]
    pub computed: ResultDisplay,

    /// Opaque values carried along unchanged.
    #[serde(default)]
    pub extras: BTreeMap<String, serde_json::Value>,

    /// Custom-field values keyed by field name.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl ModelRecord {
    /// Returns the stored gear ratio in `N:1` / `1:N` form.
    ///
    /// Older records stored a plain decimal ratio, which is renormalized.
    /// Text already written as `a:b`, or that is not a ratio, is returned
    /// unchanged.
    #[must_use]
    pub fn gear_ratio_display(&self) -> String {
        let stored = self.computed.gear_ratio.trim();
        if stored.contains(':') {
            return stored.to_string();
        }
        match parse_ratio(stored) {
            Some(value) => format_ratio(Some(value)),
            None => stored.to_string(),
        }
    }
}

/// A file-backed collection of named models.
///
/// Every mutation is written back to disk before it returns. A mutation
/// whose write fails leaves the catalog as it was.
#[derive(Debug)]
pub struct ModelCatalog {
    path: PathBuf,
    models: BTreeMap<String, ModelRecord>,
}

impl ModelCatalog {
    /// Opens the catalog at `path`.
    ///
    /// A missing file yields an empty catalog; it is created on first save.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file exists but cannot be read or is
    /// not a valid catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let models = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(CatalogError::Io { path, source }),
        };
        Ok(Self { path, models })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves `inputs` and `computed` under `name`.
    ///
    /// The name and every form entry are trimmed. Extras and custom-field
    /// values of an existing record with the same name are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyName`] for a blank name, or an I/O error
    /// if the catalog cannot be written.
    pub fn save_model(
        &mut self,
        name: &str,
        inputs: &FormFields,
        computed: ResultDisplay,
    ) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }

        let record = ModelRecord {
            inputs: inputs.trimmed(),
            computed,
            ..self.models.get(name).cloned().unwrap_or_default()
        };

        tracing::info!(name, "saving model");
        self.replace(name, Some(record)).map(drop)
    }

    /// Replaces the custom-field values of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownModel`] if no such model exists, or an
    /// I/O error if the catalog cannot be written.
    pub fn set_fields(
        &mut self,
        name: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<(), CatalogError> {
        let name = name.trim();
        let record = ModelRecord {
            fields,
            ..self
                .models
                .get(name)
                .cloned()
                .ok_or_else(|| CatalogError::UnknownModel(name.to_string()))?
        };
        self.replace(name, Some(record)).map(drop)
    }

    /// Removes `name`, returning its record if it existed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the catalog cannot be written.
    pub fn remove(&mut self, name: &str) -> Result<Option<ModelRecord>, CatalogError> {
        let name = name.trim();
        if !self.models.contains_key(name) {
            return Ok(None);
        }
        let removed = self.replace(name, None)?;
        tracing::info!(name, "removed model");
        Ok(removed)
    }

    /// Returns the record saved under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModelRecord> {
        self.models.get(name.trim())
    }

    /// Model names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Number of saved models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if no model is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Sets or clears the entry for `name` and writes the catalog.
    ///
    /// Returns the previous entry. If the write fails, the previous entry is
    /// restored before the error is returned.
    fn replace(
        &mut self,
        name: &str,
        record: Option<ModelRecord>,
    ) -> Result<Option<ModelRecord>, CatalogError> {
        let previous = match record {
            Some(record) => self.models.insert(name.to_string(), record),
            None => self.models.remove(name),
        };

        if let Err(error) = self.persist() {
            tracing::warn!(name, %error, "catalog write failed, keeping previous entry");
            match previous {
                Some(previous) => self.models.insert(name.to_string(), previous),
                None => self.models.remove(name),
            };
            return Err(error);
        }
        Ok(previous)
    }

    fn persist(&self) -> Result<(), CatalogError> {
        let content = serde_json::to_string_pretty(&self.models).map_err(CatalogError::Encode)?;
        fs::write(&self.path, content).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
