use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SQL_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|DROP)\b").expect("sql statement pattern")
});

/// Source language of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Php,
    JavaScript,
    Sql,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Php,
        Language::JavaScript,
        Language::Sql,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Php => "php",
            Language::JavaScript => "javascript",
            Language::Sql => "sql",
        }
    }

    /// Best-effort guess from surface tokens.
    ///
    /// Ambiguous snippets can misfire (a Python string containing `$` reads as PHP), so an
    /// explicit tag always wins over this.
    pub fn detect(code: &str) -> Language {
        if code.contains("<?php") || code.contains('$') {
            return Language::Php;
        }
        if SQL_STATEMENT.is_match(code) {
            return Language::Sql;
        }
        if code.contains("def ") || code.contains("import ") {
            return Language::Python;
        }
        if code.contains("function") || code.contains("const ") || code.contains("let ") {
            return Language::JavaScript;
        }
        Language::Python
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "php" => Ok(Language::Php),
            "javascript" | "js" => Ok(Language::JavaScript),
            "sql" => Ok(Language::Sql),
            other => Err(CoreError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_php() {
        assert_eq!(Language::detect("<?php echo 1;"), Language::Php);
        assert_eq!(Language::detect("$total = 3;"), Language::Php);
    }

    #[test]
    fn test_detect_sql() {
        assert_eq!(
            Language::detect("SELECT id FROM users"),
            Language::Sql
        );
        assert_eq!(Language::detect("drop table users"), Language::Sql);
    }

    #[test]
    fn test_detect_python() {
        assert_eq!(Language::detect("def main():\n    pass"), Language::Python);
        assert_eq!(Language::detect("import os"), Language::Python);
    }

    #[test]
    fn test_detect_javascript() {
        assert_eq!(
            Language::detect("const x = 1;\nfunction f() {}"),
            Language::JavaScript
        );
    }

    #[test]
    fn test_detect_defaults_to_python() {
        assert_eq!(Language::detect("x + y"), Language::Python);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("JS".parse::<Language>().unwrap(), Language::JavaScript);
        assert!(matches!(
            "ruby".parse::<Language>(),
            Err(CoreError::UnsupportedLanguage(tag)) if tag == "ruby"
        ));
    }
}
