use crate::mapping_store::MappingFile;

/// Translates synthetic names back to the originals recorded in a mapping file.
///
/// Works on arbitrary text (a diagnosis reply, an anonymized sample), so the author of a
/// snippet can read third-party feedback in their own vocabulary again.
pub struct Restorer {
    // synthetic -> original, longest synthetic first so `variable_12` is never clobbered by
    // a `variable_1` substring replacement
    replacements: Vec<(String, String)>,
}

impl Restorer {
    pub fn from_mapping(mapping: &MappingFile) -> Self {
        let mut replacements: Vec<(String, String)> = mapping
            .mapping
            .iter()
            .map(|(key, synthetic)| {
                let original = key.split_once(':').map(|(_, name)| name).unwrap_or(key);
                (synthetic.clone(), original.to_string())
            })
            .collect();
        replacements.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { replacements }
    }

    /// Original name for one synthetic identifier, if recorded.
    pub fn restore_identifier(&self, synthetic: &str) -> Option<&str> {
        self.replacements
            .iter()
            .find(|(candidate, _)| candidate == synthetic)
            .map(|(_, original)| original.as_str())
    }

    /// Replace every known synthetic name in `text` with its original.
    pub fn restore(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (synthetic, original) in &self.replacements {
            result = result.replace(synthetic, original);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping_store::MappingMetadata;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn create_test_mapping() -> MappingFile {
        let mut mapping = IndexMap::new();
        mapping.insert("function:calculate_total".to_string(), "function_1".to_string());
        mapping.insert("variable:price".to_string(), "variable_1".to_string());
        mapping.insert("table:users".to_string(), "table_1".to_string());

        MappingFile {
            mapping,
            metadata: MappingMetadata {
                created_at: "2024-01-01T00:00:00Z".to_string(),
                language: "python".to_string(),
            },
        }
    }

    #[test]
    fn test_restore_identifier() {
        let restorer = Restorer::from_mapping(&create_test_mapping());

        assert_eq!(
            restorer.restore_identifier("function_1"),
            Some("calculate_total")
        );
        assert_eq!(restorer.restore_identifier("variable_1"), Some("price"));
        assert_eq!(restorer.restore_identifier("unknown_9"), None);
    }

    #[test]
    fn test_restore_text() {
        let restorer = Restorer::from_mapping(&create_test_mapping());

        let report = "The bug is in function_1: variable_1 is read before the table_1 query runs";
        assert_eq!(
            restorer.restore(report),
            "The bug is in calculate_total: price is read before the users query runs"
        );
    }

    #[test]
    fn test_restore_prefers_longer_synthetic_names() {
        let mut mapping = IndexMap::new();
        for n in 1..=12 {
            mapping.insert(format!("variable:name{n}"), format!("variable_{n}"));
        }
        let file = MappingFile {
            mapping,
            metadata: MappingMetadata {
                created_at: "2024-01-01T00:00:00Z".to_string(),
                language: "python".to_string(),
            },
        };

        let restorer = Restorer::from_mapping(&file);

        assert_eq!(restorer.restore("variable_12 + variable_1"), "name12 + name1");
    }

    #[test]
    fn test_restore_preserves_unknown_identifiers() {
        let restorer = Restorer::from_mapping(&create_test_mapping());

        let result = restorer.restore("function_1 calls helper_fn");
        assert!(result.contains("calculate_total"));
        assert!(result.contains("helper_fn"));
    }
}
