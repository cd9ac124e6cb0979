use crate::language::Language;
use crate::registry::SymbolRegistry;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted snapshot of one anonymization run: the `{category}:{original}` to synthetic-name
/// mapping plus enough metadata to make sense of the file later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingFile {
    pub mapping: IndexMap<String, String>,
    pub metadata: MappingMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingMetadata {
    pub created_at: String,
    pub language: String,
}

impl MappingFile {
    pub fn from_registry(registry: &SymbolRegistry, language: Language) -> Self {
        Self {
            mapping: registry.export(),
            metadata: MappingMetadata {
                created_at: chrono::Utc::now().to_rfc3339(),
                language: language.name().to_string(),
            },
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mapping: MappingFile = serde_json::from_str(&json)?;
        Ok(mapping)
    }

    /// Synthetic name recorded for a `{category}:{original}` key, if any.
    pub fn synthetic_for(&self, key: &str) -> Option<&str> {
        self.mapping.get(key).map(String::as_str)
    }
}
