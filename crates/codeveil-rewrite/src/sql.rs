//! SQL pass pipeline.
//!
//! Tables after statement keywords, then DDL table names, then SELECT column lists, predicate
//! columns, and CREATE TABLE bodies. Keyword and built-in checks are case-insensitive (SQL
//! arrives in any case); synthetic names always come out lower-case.

use crate::embedded;
use codeveil_core::{vocabulary, Category, Language, SymbolRegistry};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TABLE_AFTER_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(FROM|JOIN|INTO|UPDATE)\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("table keyword pattern")
});

static TABLE_DDL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(CREATE|DROP|ALTER)\s+TABLE\s+([A-Za-z_][A-Za-z0-9_]*)")
        .expect("ddl table pattern")
});

static SELECT_COLUMNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\bSELECT\s+(.*?)\s+FROM").expect("select list pattern"));

static PREDICATE_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(WHERE|ON|AND|OR)\s+(?:([A-Za-z_][A-Za-z0-9_]*)\.)?([A-Za-z_][A-Za-z0-9_]*)\s*(>=|<=|!=|<>|=|>|<|LIKE)",
    )
    .expect("predicate column pattern")
});

static CREATE_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bCREATE\s+TABLE.*?\((.*?)\)").expect("create body pattern")
});

static AS_ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+AS\s+").expect("alias separator pattern"));

pub(crate) fn rewrite(code: &str, registry: &mut SymbolRegistry) -> String {
    let code = TABLE_AFTER_KEYWORD.replace_all(code, |caps: &Captures| {
        format!("{} {}", &caps[1], rename_table(&caps[2], registry))
    });

    let code = TABLE_DDL.replace_all(&code, |caps: &Captures| {
        format!("{} TABLE {}", &caps[1], rename_table(&caps[2], registry))
    });

    let code = SELECT_COLUMNS.replace_all(&code, |caps: &Captures| {
        format!("SELECT {} FROM", rewrite_select_list(&caps[1], registry))
    });

    let code = PREDICATE_COLUMN.replace_all(&code, |caps: &Captures| {
        let keyword = &caps[1];
        let column = &caps[3];
        let operator = &caps[4];
        if is_reserved(column) {
            return caps[0].to_string();
        }
        let prefix = match caps.get(2) {
            Some(table) => format!("{}.", rename_table(table.as_str(), registry)),
            None => String::new(),
        };
        format!(
            "{keyword} {prefix}{} {operator}",
            rename_column(column, registry)
        )
    });

    let code = CREATE_BODY.replace_all(&code, |caps: &Captures| {
        let body = &caps[1];
        let rewritten = rewrite_column_definitions(body, registry);
        caps[0].replacen(body, &rewritten, 1)
    });

    code.into_owned()
}

/// One comma-separated SELECT list.
fn rewrite_select_list(columns: &str, registry: &mut SymbolRegistry) -> String {
    columns
        .split(',')
        .map(|column| rewrite_select_item(column.trim(), registry))
        .collect::<Vec<_>>()
        .join(", ")
}

fn rewrite_select_item(item: &str, registry: &mut SymbolRegistry) -> String {
    let upper = item.to_uppercase();
    if item == "*"
        || upper.starts_with("COUNT")
        || upper.starts_with("SUM")
        || upper.starts_with("AVG")
        || upper.starts_with("MIN")
        || upper.starts_with("MAX")
    {
        return item.to_string();
    }

    if let Some(separator) = AS_ALIAS.find(item) {
        let base = item[..separator.start()].trim();
        let alias = item[separator.end()..].trim();
        return format!(
            "{} AS {}",
            rewrite_column_ref(base, registry),
            rename_column(alias, registry)
        );
    }

    rewrite_column_ref(item, registry)
}

/// A column reference, with or without a `table.` qualifier.
fn rewrite_column_ref(column: &str, registry: &mut SymbolRegistry) -> String {
    let column = column.trim();

    if let Some((table, name)) = column.split_once('.') {
        return format!(
            "{}.{}",
            rename_table(table.trim(), registry),
            rename_column(name.trim(), registry)
        );
    }

    if is_reserved(column) {
        return column.to_string();
    }
    rename_column(column, registry)
}

/// A CREATE TABLE body: only the leading identifier of each definition is a column name; type
/// and constraint tokens stay as they are.
fn rewrite_column_definitions(body: &str, registry: &mut SymbolRegistry) -> String {
    body.split(',')
        .map(|definition| {
            let mut parts: Vec<String> = definition
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if let Some(first) = parts.first_mut() {
                if !is_reserved(first) {
                    *first = rename_column(first, registry);
                }
            }
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_reserved(name: &str) -> bool {
    let upper = name.to_uppercase();
    vocabulary::is_keyword(&upper) || vocabulary::is_builtin(&upper, Language::Sql)
}

fn rename_table(name: &str, registry: &mut SymbolRegistry) -> String {
    if embedded::is_placeholder(name) {
        return name.to_string();
    }
    registry.anonymize(name, Category::Table)
}

fn rename_column(name: &str, registry: &mut SymbolRegistry) -> String {
    if embedded::is_placeholder(name) {
        return name.to_string();
    }
    registry.anonymize(name, Category::Column)
}
