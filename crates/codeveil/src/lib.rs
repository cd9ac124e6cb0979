/*! Unified interface for source-code anonymization.
 *
 * Single import for everything you need: anonymizing fragments in any supported language,
 * scoping one registry across several fragments, and translating feedback on an anonymized
 * sample back into the original vocabulary with a saved mapping file.
 */

pub use codeveil_core as core;

pub use codeveil_core::{
    Category, CoreError, Language, MappingFile, MappingMetadata, Restorer, SymbolRegistry,
};

pub use codeveil_rewrite::{rewrite, Anonymized, Anonymizer};
