/*! Language-specific rewriting passes over raw source text.
 *
 * Each supported language gets an ordered sequence of regex passes that decide, match by match,
 * whether a captured name is fixed vocabulary (left alone) or renameable (sent through the
 * shared registry). No syntax tree is built: a pass that fails to match leaves its text
 * unchanged, so malformed fragments degrade to under-anonymization instead of corruption.
 */

mod embedded;
mod javascript;
mod php;
mod python;
mod sql;

use codeveil_core::{Category, CoreError, Language, SymbolRegistry};
use indexmap::IndexMap;

/// Result of one anonymization run.
#[derive(Debug, Clone)]
pub struct Anonymized {
    pub code: String,
    /// First-seen-order snapshot keyed `{category}:{original}`.
    pub mapping: IndexMap<String, String>,
    pub language: Language,
}

/// Front door of the engine: owns a registry and dispatches fragments to the per-language
/// rewriters.
///
/// Reusing one `Anonymizer` across fragments keeps their renamings consistent (the same
/// original name always maps to the same synthetic name); call `reset` or build a fresh
/// instance to isolate runs.
#[derive(Debug, Default)]
pub struct Anonymizer {
    registry: SymbolRegistry,
}

impl Anonymizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue an earlier session by adopting its registry.
    pub fn with_registry(registry: SymbolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// Anonymize `code`, detecting the language when none is given.
    pub fn process(&mut self, code: &str, language: Option<Language>) -> Anonymized {
        let language = language.unwrap_or_else(|| Language::detect(code));
        tracing::debug!(
            language = language.name(),
            bytes = code.len(),
            "rewriting fragment"
        );
        let code = rewrite(code, language, &mut self.registry);

        Anonymized {
            code,
            mapping: self.registry.export(),
            language,
        }
    }

    /// Like `process`, resolving a textual tag first.
    ///
    /// `"auto"` detects from the fragment; an unknown tag fails before any text is touched.
    pub fn process_tagged(&mut self, code: &str, tag: &str) -> Result<Anonymized, CoreError> {
        let language = if tag.eq_ignore_ascii_case("auto") {
            None
        } else {
            Some(tag.parse()?)
        };
        Ok(self.process(code, language))
    }

    /// Direct access to the renaming contract, for callers anonymizing single names.
    pub fn anonymize(&mut self, name: &str, category: Category) -> String {
        self.registry.anonymize(name, category)
    }

    /// Clear every mapping and counter.
    pub fn reset(&mut self) {
        self.registry.reset();
    }
}

/// Run the pass pipeline for `language` over `code` against an external registry.
///
/// Lets callers scope one registry across documents, sessions or processes as they see fit.
pub fn rewrite(code: &str, language: Language, registry: &mut SymbolRegistry) -> String {
    match language {
        Language::Python => python::rewrite(code, registry),
        Language::Php => php::rewrite(code, registry),
        Language::JavaScript => javascript::rewrite(code, registry),
        Language::Sql => sql::rewrite(code, registry),
    }
}
