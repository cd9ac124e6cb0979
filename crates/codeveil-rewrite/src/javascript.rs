//! JavaScript pass pipeline.
//!
//! Declarations mint names (function/class declarations, arrow bindings, `const|let|var`,
//! single-name destructuring, single bare parameters); two trailing consultation passes then
//! re-link known usages and call sites, the same two-phase split the Python pipeline uses.

use codeveil_core::{vocabulary, Category, Language, SymbolRegistry};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s+([A-Za-z_$][A-Za-z0-9_$]*)").expect("function decl pattern")
});

static ARROW_BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(const|let|var)(\s+)([A-Za-z_$][A-Za-z0-9_$]*)(\s*=\s*)(\([^)]*\)|[A-Za-z_$][A-Za-z0-9_$]*)(\s*=>)",
    )
    .expect("arrow binding pattern")
});

static CLASS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass\s+([A-Za-z_$][A-Za-z0-9_$]*)").expect("class decl pattern")
});

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)").expect("declaration pattern")
});

static DESTRUCTURING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\}").expect("destructuring pattern")
});

static BARE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([A-Za-z_$][A-Za-z0-9_$]*)\)").expect("bare parameter pattern")
});

static USAGE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"\b([A-Za-z_$][A-Za-z0-9_$]*)\b(?!\s*\()").expect("usage pattern")
});

static CALL_SITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_$][A-Za-z0-9_$]*)\s*\(").expect("call site pattern")
});

pub(crate) fn rewrite(code: &str, registry: &mut SymbolRegistry) -> String {
    let code = FUNCTION_DECL.replace_all(code, |caps: &Captures| {
        format!("function {}", registry.anonymize(&caps[1], Category::Function))
    });

    let code = ARROW_BINDING.replace_all(&code, |caps: &Captures| {
        let renamed = registry.anonymize(&caps[3], Category::Function);
        format!(
            "{}{}{}{}{}{}",
            &caps[1], &caps[2], renamed, &caps[4], &caps[5], &caps[6]
        )
    });

    let code = CLASS_DECL.replace_all(&code, |caps: &Captures| {
        format!("class {}", registry.anonymize(&caps[1], Category::Class))
    });

    let code = DECLARATION.replace_all(&code, |caps: &Captures| {
        let name = &caps[2];
        // the arrow pass already rewrote its bindings; their synthetic names must not be
        // re-minted as variables here
        if vocabulary::is_builtin(name, Language::JavaScript) || registry.is_synthetic(name) {
            return caps[0].to_string();
        }
        format!("{} {}", &caps[1], registry.anonymize(name, Category::Variable))
    });

    let code = DESTRUCTURING.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::JavaScript) {
            return caps[0].to_string();
        }
        format!("{{ {} }}", registry.anonymize(name, Category::Variable))
    });

    let code = BARE_PARAM.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::JavaScript) || vocabulary::is_keyword(name) {
            return caps[0].to_string();
        }
        format!("({})", registry.anonymize(name, Category::Variable))
    });

    let code = USAGE.replace_all(&code, |caps: &fancy_regex::Captures| {
        let name = &caps[1];
        if vocabulary::is_keyword(name) || vocabulary::is_builtin(name, Language::JavaScript) {
            return caps[0].to_string();
        }
        match registry.lookup(name, Category::Variable) {
            Some(synthetic) => synthetic.to_string(),
            None => caps[0].to_string(),
        }
    });

    let code = CALL_SITE.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_keyword(name) || vocabulary::is_builtin(name, Language::JavaScript) {
            return caps[0].to_string();
        }
        match registry.lookup(name, Category::Function) {
            Some(synthetic) => format!("{synthetic}("),
            None => caps[0].to_string(),
        }
    });

    code.into_owned()
}
