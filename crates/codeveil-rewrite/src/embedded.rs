//! SQL fragments embedded in PHP string literals.
//!
//! Interpolated `$vars` inside a fragment are swapped for positional placeholders before the
//! query passes run, then restored in order, so host interpolation survives table/column
//! renaming byte for byte. This must happen before any host-level variable renaming, which
//! would otherwise destroy the markers this step keys on.

use crate::sql;
use codeveil_core::SymbolRegistry;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DOUBLE_QUOTED_SQL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)"([^"]*(?:SELECT|INSERT|UPDATE|DELETE|FROM|WHERE|JOIN|CREATE|DROP|ALTER)[^"]*)""#,
    )
    .expect("double-quoted sql pattern")
});

static SINGLE_QUOTED_SQL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)'([^']*(?:SELECT|INSERT|UPDATE|DELETE|FROM|WHERE|JOIN|CREATE|DROP|ALTER)[^']*)'",
    )
    .expect("single-quoted sql pattern")
});

static INTERPOLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[A-Za-z_][A-Za-z0-9_]*").expect("interpolation pattern"));

/// Anonymize every string literal that looks like a query, leaving the rest of `code` alone.
pub(crate) fn anonymize_sql_in_strings(code: &str, registry: &mut SymbolRegistry) -> String {
    let code = DOUBLE_QUOTED_SQL.replace_all(code, |caps: &Captures| {
        format!("\"{}\"", anonymize_query(&caps[1], registry))
    });

    let code = SINGLE_QUOTED_SQL.replace_all(&code, |caps: &Captures| {
        format!("'{}'", anonymize_query(&caps[1], registry))
    });

    code.into_owned()
}

/// Protect interpolations, run the query passes, put the interpolations back.
pub(crate) fn anonymize_query(fragment: &str, registry: &mut SymbolRegistry) -> String {
    let (protected, interpolations) = protect_interpolations(fragment);
    if !interpolations.is_empty() {
        tracing::debug!(count = interpolations.len(), "protected host interpolations");
    }
    let rewritten = sql::rewrite(&protected, registry);
    restore_interpolations(rewritten, &interpolations)
}

/// Whether `name` is one of this module's positional placeholders. The query passes keep such
/// tokens verbatim so every placeholder survives to restoration.
pub(crate) fn is_placeholder(name: &str) -> bool {
    name.strip_prefix("__PHPVAR")
        .and_then(|rest| rest.strip_suffix("__"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn placeholder(index: usize) -> String {
    format!("__PHPVAR{index}__")
}

/// Swap each `$var` for a positional placeholder, recording originals in match order.
pub(crate) fn protect_interpolations(fragment: &str) -> (String, Vec<String>) {
    let mut originals = Vec::new();
    let protected = INTERPOLATION
        .replace_all(fragment, |caps: &Captures| {
            let token = placeholder(originals.len());
            originals.push(caps[0].to_string());
            token
        })
        .into_owned();
    (protected, originals)
}

/// Put the recorded interpolations back, first occurrence of each placeholder in order.
pub(crate) fn restore_interpolations(fragment: String, originals: &[String]) -> String {
    let mut result = fragment;
    for (index, original) in originals.iter().enumerate() {
        result = result.replacen(&placeholder(index), original, 1);
    }
    result
}
