/*! Core renaming machinery for source-code anonymization.
 *
 * Code samples shared for diagnosis leak internal naming: business terms, table and column
 * names, credential-adjacent identifiers. This crate holds the registry that maps every such
 * name to a stable synthetic replacement, the vocabulary tables that decide what must never be
 * renamed, and the mapping files that let an anonymized sample be translated back afterwards.
 */

pub mod category;
pub mod error;
pub mod language;
pub mod mapping_store;
pub mod registry;
pub mod restore;
pub mod vocabulary;

pub use category::Category;
pub use error::CoreError;
pub use language::Language;
pub use mapping_store::{MappingFile, MappingMetadata};
pub use registry::SymbolRegistry;
pub use restore::Restorer;
