//! Fixed vocabulary that survives anonymization untouched.
//!
//! Three families: per-language built-ins (runtime and standard-library names), one
//! cross-language keyword set (rewriters can meet another language's reserved words inside
//! embedded fragments), and the PHP superglobal prefix.

mod builtins;
mod keywords;

use crate::language::Language;

/// Prefix of the reserved superglobal family (`$_POST`, `$_SESSION`, ...).
pub const SUPERGLOBAL_PREFIX: &str = "$_";

/// Whether `token` belongs to the superglobal family. Checked on the full sigil-bearing token.
pub fn is_superglobal(token: &str) -> bool {
    token.starts_with(SUPERGLOBAL_PREFIX)
}

/// Whether `name` is a built-in of `language`. Case-sensitive; SQL callers upper-case first.
pub fn is_builtin(name: &str, language: Language) -> bool {
    builtins::set_for(language).contains(name)
}

/// Whether `name` is a built-in of any supported language.
pub fn is_any_builtin(name: &str) -> bool {
    builtins::any_set().contains(name)
}

/// Whether `name` is a reserved keyword in any supported language.
pub fn is_keyword(name: &str) -> bool {
    keywords::set().contains(name)
}
