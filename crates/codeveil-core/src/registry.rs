use crate::category::Category;
use crate::vocabulary;
use indexmap::IndexMap;

/// Run-scoped store assigning every renameable `(category, name)` pair a stable synthetic name.
///
/// One registry spans one anonymization session. Feeding several fragments through the same
/// registry keeps their renamings consistent; callers wanting isolation create a fresh one or
/// call [`SymbolRegistry::reset`]. Mutation is single-threaded by design.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    mapping: IndexMap<(Category, String), String>,
    counters: [usize; Category::ALL.len()],
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to its synthetic replacement, minting one on first sight.
    ///
    /// Superglobals, built-ins and keywords pass through verbatim; they are never stored and
    /// never bump a counter. Total over any string input, and idempotent: the same
    /// `(name, category)` pair always comes back as the same synthetic name within a run.
    pub fn anonymize(&mut self, name: &str, category: Category) -> String {
        if vocabulary::is_superglobal(name) {
            return name.to_string();
        }
        if vocabulary::is_any_builtin(name) || vocabulary::is_keyword(name) {
            return name.to_string();
        }
        if let Some(existing) = self.mapping.get(&(category, name.to_string())) {
            return existing.clone();
        }

        let counter = &mut self.counters[category.index()];
        *counter += 1;
        let synthetic = format!("{}_{}", category.prefix(), counter);
        self.mapping
            .insert((category, name.to_string()), synthetic.clone());
        synthetic
    }

    /// Look up an existing mapping without creating one.
    ///
    /// Usage passes consult this so a name's category stays fixed by its declaration site; a
    /// name used before any declaration is left alone rather than guessed.
    pub fn lookup(&self, name: &str, category: Category) -> Option<&str> {
        self.mapping
            .get(&(category, name.to_string()))
            .map(String::as_str)
    }

    /// Whether `name` is a synthetic name this registry has already handed out.
    ///
    /// Passes that re-scan already rewritten text use this so a freshly minted name is never
    /// re-minted under another category.
    pub fn is_synthetic(&self, name: &str) -> bool {
        self.mapping.values().any(|synthetic| synthetic == name)
    }

    /// Drop every mapping and zero all counters.
    pub fn reset(&mut self) {
        self.mapping.clear();
        self.counters = [0; Category::ALL.len()];
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Current counter value for `category` (the number of names minted in it so far).
    pub fn counter(&self, category: Category) -> usize {
        self.counters[category.index()]
    }

    /// Snapshot of the mapping in first-seen order, keyed `{category}:{original}`.
    pub fn export(&self) -> IndexMap<String, String> {
        self.mapping
            .iter()
            .map(|((category, original), synthetic)| {
                (
                    format!("{}:{}", category.prefix(), original),
                    synthetic.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minting_is_sequential_per_category() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.anonymize("price", Category::Variable), "variable_1");
        assert_eq!(
            registry.anonymize("tax_rate", Category::Variable),
            "variable_2"
        );
        assert_eq!(
            registry.anonymize("calculate", Category::Function),
            "function_1"
        );
        assert_eq!(registry.anonymize("users", Category::Table), "table_1");
    }

    #[test]
    fn test_renaming_is_idempotent() {
        let mut registry = SymbolRegistry::new();

        let first = registry.anonymize("price", Category::Variable);
        let second = registry.anonymize("price", Category::Variable);

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_categories_never_share_entries() {
        let mut registry = SymbolRegistry::new();

        let as_variable = registry.anonymize("status", Category::Variable);
        let as_table = registry.anonymize("status", Category::Table);

        assert_eq!(as_variable, "variable_1");
        assert_eq!(as_table, "table_1");
        assert_ne!(as_variable, as_table);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_builtins_pass_through_without_counting() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.anonymize("print", Category::Function), "print");
        assert_eq!(registry.anonymize("mysql_query", Category::Variable), "mysql_query");
        assert_eq!(registry.anonymize("SELECT", Category::Column), "SELECT");

        assert!(registry.is_empty());
        for category in Category::ALL {
            assert_eq!(registry.counter(category), 0);
        }
    }

    #[test]
    fn test_keywords_pass_through() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.anonymize("def", Category::Variable), "def");
        assert_eq!(registry.anonymize("this", Category::Variable), "this");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_superglobals_pass_through() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.anonymize("$_POST", Category::Variable), "$_POST");
        assert_eq!(
            registry.anonymize("$_SESSION", Category::Constant),
            "$_SESSION"
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_never_mints() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.lookup("price", Category::Variable), None);
        assert!(registry.is_empty());

        registry.anonymize("price", Category::Variable);
        assert_eq!(
            registry.lookup("price", Category::Variable),
            Some("variable_1")
        );
        assert_eq!(registry.lookup("price", Category::Function), None);
    }

    #[test]
    fn test_is_synthetic() {
        let mut registry = SymbolRegistry::new();
        registry.anonymize("getUserInfo", Category::Function);

        assert!(registry.is_synthetic("function_1"));
        assert!(!registry.is_synthetic("getUserInfo"));
        assert!(!registry.is_synthetic("variable_1"));
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut registry = SymbolRegistry::new();
        registry.anonymize("price", Category::Variable);
        registry.anonymize("users", Category::Table);

        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.anonymize("other", Category::Variable), "variable_1");
    }

    #[test]
    fn test_export_preserves_first_seen_order() {
        let mut registry = SymbolRegistry::new();
        registry.anonymize("beta", Category::Variable);
        registry.anonymize("users", Category::Table);
        registry.anonymize("alpha", Category::Variable);

        let exported = registry.export();
        let keys: Vec<&str> = exported.keys().map(String::as_str).collect();

        assert_eq!(keys, ["variable:beta", "table:users", "variable:alpha"]);
        assert_eq!(exported["variable:beta"], "variable_1");
        assert_eq!(exported["table:users"], "table_1");
        assert_eq!(exported["variable:alpha"], "variable_2");
    }
}
