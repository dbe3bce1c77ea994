//! Export configuration registry
//!
//! The registry maps entity type keys to their [`ExportConfig`]. It is
//! assembled once by [`RegistryBuilder`] and never mutated afterwards;
//! engines borrow it for as long as they need it.
//!
//! Operators can add or override entity types with a YAML definition file:
//!
//! ```yaml
//! entities:
//!   vendors:
//!     file_name: vendor-list.csv
//!     columns:
//!       - header: ID
//!         path: id
//!       - header: Active
//!         path: is_active
//!         transform: yes_no
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::paths::TallyPaths;
use crate::error::{TallyError, TallyResult};

use super::builtin::BUILTIN_TABLES;
use super::config::{Column, ColumnSpec, EntityTable, ExportConfig};
use super::transform;

/// Immutable lookup of export configurations by entity type
#[derive(Debug, Clone, Default)]
pub struct ExportRegistry {
    configs: BTreeMap<String, ExportConfig>,
}

impl ExportRegistry {
    /// Registry holding only the built-in tables
    pub fn builtin() -> TallyResult<Self> {
        RegistryBuilder::new().with_builtin()?.build()
    }

    /// Built-in tables plus the definition file under `paths`, if present
    pub fn load(paths: &TallyPaths) -> TallyResult<Self> {
        let mut builder = RegistryBuilder::new().with_builtin()?;

        let definitions_path = paths.definitions_file();
        if definitions_path.exists() {
            let file = DefinitionFile::load(&definitions_path)?;
            builder = builder.definitions(file)?;
        }

        builder.build()
    }

    /// Configuration registered for an entity type
    pub fn get(&self, entity_type: &str) -> Option<&ExportConfig> {
        self.configs.get(entity_type)
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.configs.contains_key(entity_type)
    }

    /// Registered entity types, sorted
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Entity types with their configurations, sorted by entity type
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExportConfig)> {
        self.configs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Assembles an [`ExportRegistry`]
///
/// Registering an entity type twice keeps the later configuration.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    configs: BTreeMap<String, ExportConfig>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every built-in table
    pub fn with_builtin(mut self) -> TallyResult<Self> {
        for table in BUILTIN_TABLES {
            self = self.table(table)?;
        }
        Ok(self)
    }

    /// Register a static table
    pub fn table(self, table: &EntityTable) -> TallyResult<Self> {
        let config = table.to_config()?;
        Ok(self.config(table.entity_type, config))
    }

    /// Register an already validated configuration
    pub fn config(mut self, entity_type: impl Into<String>, config: ExportConfig) -> Self {
        let entity_type = entity_type.into();
        if self.configs.contains_key(&entity_type) {
            debug!(entity_type = %entity_type, "Replacing export configuration");
        }
        self.configs.insert(entity_type, config);
        self
    }

    /// Register every entity from a definition file
    pub fn definitions(mut self, file: DefinitionFile) -> TallyResult<Self> {
        for (entity_type, definition) in file.entities {
            let config = definition.into_config().map_err(|e| {
                TallyError::Config(format!("Invalid definition for '{}': {}", entity_type, e))
            })?;
            self = self.config(entity_type, config);
        }
        Ok(self)
    }

    pub fn build(self) -> TallyResult<ExportRegistry> {
        debug!(entities = self.configs.len(), "Export registry built");
        Ok(ExportRegistry {
            configs: self.configs,
        })
    }
}

/// Contents of a YAML definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub entities: BTreeMap<String, EntityDefinition>,
}

/// One entity type in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub file_name: String,
    pub columns: Vec<ColumnDefinition>,
}

/// One column in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub header: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl DefinitionFile {
    /// Parse a definition file from YAML text
    pub fn from_yaml_str(yaml: &str) -> TallyResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| TallyError::Config(format!("Failed to parse definitions: {}", e)))
    }

    /// Read and parse a definition file
    pub fn load(path: &Path) -> TallyResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TallyError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }
}

impl EntityDefinition {
    fn into_config(self) -> TallyResult<ExportConfig> {
        let columns = self
            .columns
            .into_iter()
            .map(|col| {
                let spec = match col.transform.as_deref() {
                    None => ColumnSpec::new(col.path),
                    Some(name) => {
                        let t = transform::lookup(name).ok_or_else(|| {
                            TallyError::Validation(format!(
                                "Unknown transform '{}' for column '{}'",
                                name, col.header
                            ))
                        })?;
                        ColumnSpec::with_transform(col.path, t)
                    }
                };
                Ok::<_, TallyError>(Column::new(col.header, spec))
            })
            .collect::<TallyResult<Vec<_>>>()?;

        ExportConfig::new(self.file_name, columns)
    }
}
