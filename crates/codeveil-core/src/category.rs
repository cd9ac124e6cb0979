use serde::{Deserialize, Serialize};
use std::fmt;

/// Renaming namespace a name belongs to.
///
/// The category is baked into every synthetic name (`variable_3`, `table_1`), so two names from
/// different categories can never collide even when the original lexeme is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Variable,
    Function,
    Class,
    Table,
    Column,
    Constant,
    StringLiteral,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Variable,
        Category::Function,
        Category::Class,
        Category::Table,
        Category::Column,
        Category::Constant,
        Category::StringLiteral,
    ];

    /// Prefix used when synthesizing replacement names.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Variable => "variable",
            Category::Function => "function",
            Category::Class => "class",
            Category::Table => "table",
            Category::Column => "column",
            Category::Constant => "constant",
            Category::StringLiteral => "string",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Variable => 0,
            Category::Function => 1,
            Category::Class => 2,
            Category::Table => 3,
            Category::Column => 4,
            Category::Constant => 5,
            Category::StringLiteral => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
