//! Python pass pipeline.
//!
//! Declaration-style passes mint names (`def`, `class`, assignments, imports); two trailing
//! consultation passes re-link usages and call sites without ever minting, so a name's
//! category is fixed by where it was declared, and a name used before its defining assignment
//! is left alone.

use codeveil_core::{vocabulary, Category, Language, SymbolRegistry};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bdef\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)\)").expect("function def pattern")
});

static CLASS_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_][A-Za-z0-9_]*)").expect("class def pattern"));

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)([A-Za-z_][A-Za-z0-9_]*)\s*=").expect("assignment pattern")
});

static IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimport\s+([A-Za-z_][A-Za-z0-9_]*)").expect("import pattern"));

static FROM_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfrom\s+([A-Za-z_][A-Za-z0-9_]*)").expect("from pattern"));

static USAGE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\b(?!\s*\()").expect("usage pattern")
});

static CALL_SITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("call site pattern")
});

pub(crate) fn rewrite(code: &str, registry: &mut SymbolRegistry) -> String {
    let code = FUNCTION_DEF.replace_all(code, |caps: &Captures| {
        let renamed = registry.anonymize(&caps[1], Category::Function);
        let params = rewrite_params(&caps[2], registry);
        format!("def {renamed}({params})")
    });

    let code = CLASS_DEF.replace_all(&code, |caps: &Captures| {
        format!("class {}", registry.anonymize(&caps[1], Category::Class))
    });

    let code = ASSIGNMENT.replace_all(&code, |caps: &Captures| {
        let indent = &caps[1];
        let name = &caps[2];
        if vocabulary::is_keyword(name) || vocabulary::is_builtin(name, Language::Python) {
            return caps[0].to_string();
        }
        format!("{indent}{} =", registry.anonymize(name, Category::Variable))
    });

    // Module identifiers are renamed at the same granularity as ordinary variables.
    let code = IMPORT.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Python) {
            return caps[0].to_string();
        }
        format!("import {}", registry.anonymize(name, Category::Variable))
    });

    let code = FROM_IMPORT.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Python) {
            return caps[0].to_string();
        }
        format!("from {}", registry.anonymize(name, Category::Variable))
    });

    let code = USAGE.replace_all(&code, |caps: &fancy_regex::Captures| {
        let name = &caps[1];
        if vocabulary::is_keyword(name) || vocabulary::is_builtin(name, Language::Python) {
            return caps[0].to_string();
        }
        match registry.lookup(name, Category::Variable) {
            Some(synthetic) => synthetic.to_string(),
            None => caps[0].to_string(),
        }
    });

    let code = CALL_SITE.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_keyword(name) || vocabulary::is_builtin(name, Language::Python) {
            return caps[0].to_string();
        }
        match registry.lookup(name, Category::Function) {
            Some(synthetic) => format!("{synthetic}("),
            None => caps[0].to_string(),
        }
    });

    code.into_owned()
}

/// Rename each parameter, re-attaching `*`/`**` sigils and `=default` suffixes exactly as
/// found.
fn rewrite_params(params: &str, registry: &mut SymbolRegistry) -> String {
    if params.trim().is_empty() {
        return String::new();
    }

    params
        .split(',')
        .map(|param| {
            let param = param.trim();

            if let Some((name, default)) = param.split_once('=') {
                let renamed = registry.anonymize(name.trim(), Category::Variable);
                return format!("{renamed}={}", default.trim());
            }

            if let Some(rest) = param.strip_prefix("**") {
                return format!("**{}", registry.anonymize(rest, Category::Variable));
            }

            if let Some(rest) = param.strip_prefix('*') {
                return format!("*{}", registry.anonymize(rest, Category::Variable));
            }

            registry.anonymize(param, Category::Variable)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
