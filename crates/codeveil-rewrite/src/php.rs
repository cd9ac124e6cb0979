//! PHP pass pipeline.
//!
//! Embedded SQL is handled first, before host-level renaming can disturb the `$var` markers
//! the query step keys on. Then bracketed string keys, declarations, sigil variables, member
//! and static access, and ALL-CAPS constants, in that order.

use crate::embedded;
use codeveil_core::{vocabulary, Category, Language, SymbolRegistry};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static BRACKET_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[["']([A-Za-z_][A-Za-z0-9_]*)["']\]"#).expect("bracket key pattern")
});

static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s+([A-Za-z_][A-Za-z0-9_]*)").expect("function def pattern")
});

static CLASS_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+([A-Za-z_][A-Za-z0-9_]*)").expect("class def pattern"));

static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("variable pattern"));

static MEMBER_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"->([A-Za-z_][A-Za-z0-9_]*)").expect("member access pattern"));

static STATIC_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"::([A-Za-z_][A-Za-z0-9_]*)").expect("static access pattern"));

// The optional `$` alternative keeps superglobal bodies out of this pass: `$_POST` would
// otherwise match as the ALL-CAPS token `_POST`.
static CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(\$)|\b)([A-Z_][A-Z0-9_]{2,})\b").expect("constant pattern")
});

pub(crate) fn rewrite(code: &str, registry: &mut SymbolRegistry) -> String {
    let code = embedded::anonymize_sql_in_strings(code, registry);

    let code = BRACKET_KEY.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        format!("[\"{}\"]", registry.anonymize(name, Category::StringLiteral))
    });

    let code = FUNCTION_DEF.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        format!("function {}", registry.anonymize(name, Category::Function))
    });

    let code = CLASS_DEF.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        format!("class {}", registry.anonymize(name, Category::Class))
    });

    let code = VARIABLE.replace_all(&code, |caps: &Captures| {
        let token = &caps[0];
        // the full token decides: $_POST is reserved, $post is not
        if vocabulary::is_superglobal(token) {
            return token.to_string();
        }
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return token.to_string();
        }
        format!("${}", registry.anonymize(name, Category::Variable))
    });

    let code = MEMBER_ACCESS.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        format!("->{}", registry.anonymize(name, Category::Variable))
    });

    let code = STATIC_ACCESS.replace_all(&code, |caps: &Captures| {
        let name = &caps[1];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        format!("::{}", registry.anonymize(name, Category::Variable))
    });

    let code = CONSTANT.replace_all(&code, |caps: &Captures| {
        if caps.get(1).is_some() {
            return caps[0].to_string();
        }
        let name = &caps[2];
        if vocabulary::is_builtin(name, Language::Php) {
            return caps[0].to_string();
        }
        registry.anonymize(name, Category::Constant)
    });

    code.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(code: &str) -> String {
        let mut registry = SymbolRegistry::new();
        rewrite(code, &mut registry)
    }

    #[test]
    fn test_variables_and_superglobals() {
        let output = run("$user = $_POST['username'];");

        assert_eq!(output, "$variable_1 = $_POST[\"string_1\"];");
    }

    #[test]
    fn test_builtin_variables_survive() {
        let output = run("$count = count($rows);");

        // `count` is a built-in name, so the sigil token survives as-is
        assert!(output.starts_with("$count ="));
        assert!(output.contains("count($variable_1)"));
    }

    #[test]
    fn test_function_and_class_definitions() {
        let output = run("class UserController {\n    public function getUser($userId) {\n        return $userId;\n    }\n}");

        assert!(output.contains("class class_1"));
        assert!(output.contains("function function_1($variable_1)"));
        assert!(output.contains("return $variable_1;"));
    }

    #[test]
    fn test_member_and_static_access() {
        let output = run("$this->database->query($sql); Config::load();");

        // `$this` is a keyword, `$sql` takes the first variable slot before the
        // member pass runs
        assert_eq!(
            output,
            "$this->variable_2->variable_3($variable_1); Config::variable_4();"
        );
    }

    #[test]
    fn test_constants() {
        let output = run("$limit = MAX_RETRIES + 1;");

        assert_eq!(output, "$variable_1 = constant_1 + 1;");
    }

    #[test]
    fn test_superglobal_body_is_not_a_constant() {
        let output = run("$method = $_SERVER;");

        assert_eq!(output, "$variable_1 = $_SERVER;");
    }

    #[test]
    fn test_embedded_sql_runs_before_variable_renaming() {
        let output =
            run("$query = \"SELECT * FROM administratori WHERE username LIKE '$username'\";");

        assert!(output.contains("FROM table_1"));
        assert!(output.contains("column_1 LIKE"));
        // the interpolation inside the string is renamed consistently with the
        // host-level `$username`
        assert!(output.contains("'$variable_2'"));
    }
}
