use crate::language::Language;
use std::collections::HashSet;
use std::sync::LazyLock;

const PYTHON: &[&str] = &[
    "print",
    "len",
    "str",
    "int",
    "list",
    "dict",
    "range",
    "enumerate",
    "zip",
    "map",
    "filter",
    "open",
    "file",
    "input",
    "type",
    "isinstance",
    "True",
    "False",
    "None",
    "abs",
    "all",
    "any",
    "bin",
    "bool",
    "bytes",
    "chr",
    "complex",
    "dir",
    "divmod",
    "float",
    "format",
    "frozenset",
    "hex",
    "id",
    "iter",
    "max",
    "min",
    "next",
    "oct",
    "ord",
    "pow",
    "reversed",
    "round",
    "set",
    "slice",
    "sorted",
    "sum",
    "tuple",
];

const PHP: &[&str] = &[
    "echo",
    "print",
    "var_dump",
    "isset",
    "empty",
    "array",
    "count",
    "strlen",
    "strpos",
    "substr",
    "explode",
    "implode",
    "true",
    "false",
    "null",
    "TRUE",
    "FALSE",
    "NULL",
    "die",
    "exit",
    "include",
    "require",
    "include_once",
    "require_once",
    // legacy mysql_* API, still everywhere in shared snippets
    "mysql_query",
    "mysql_fetch_array",
    "mysql_fetch_assoc",
    "mysql_num_rows",
    "mysql_real_escape_string",
    "mysql_error",
    "mysql_connect",
    "mysql_select_db",
    "mysql_close",
    "mysqli_query",
    "mysqli_connect",
    "mysqli_close",
    "mysqli_fetch_assoc",
    "md5",
    "sha1",
    "hash",
    "json_encode",
    "json_decode",
    "serialize",
    "unserialize",
    "file_get_contents",
    "file_put_contents",
    "is_array",
    "is_string",
    "is_numeric",
    "in_array",
    "array_merge",
    "array_push",
    "array_pop",
    "trim",
    "strtolower",
    "strtoupper",
    "preg_match",
    "preg_replace",
    "str_replace",
    "strstr",
    "strrev",
    "ucfirst",
    "lcfirst",
];

const JAVASCRIPT: &[&str] = &[
    "console",
    "log",
    "window",
    "document",
    "alert",
    "prompt",
    "confirm",
    "setTimeout",
    "setInterval",
    "parseInt",
    "parseFloat",
    "JSON",
    "Math",
    "Date",
    "Array",
    "Object",
    "String",
    "Number",
    "Boolean",
    "true",
    "false",
    "null",
    "undefined",
    "isNaN",
    "isFinite",
    "eval",
    "Error",
    "Promise",
    "Symbol",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
];

const SQL: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "INSERT",
    "UPDATE",
    "DELETE",
    "CREATE",
    "DROP",
    "ALTER",
    "TABLE",
    "DATABASE",
    "INDEX",
    "JOIN",
    "LEFT",
    "RIGHT",
    "INNER",
    "OUTER",
    "ON",
    "AND",
    "OR",
    "NOT",
    "IN",
    "LIKE",
    "ORDER",
    "BY",
    "GROUP",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "DISTINCT",
    "AS",
    "DESC",
    "ASC",
    "UNION",
    "ALL",
    "EXISTS",
    "BETWEEN",
    "IS",
    "NULL",
];

static PYTHON_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PYTHON.iter().copied().collect());
static PHP_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| PHP.iter().copied().collect());
static JAVASCRIPT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| JAVASCRIPT.iter().copied().collect());
static SQL_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| SQL.iter().copied().collect());

static ANY_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [PYTHON, PHP, JAVASCRIPT, SQL]
        .into_iter()
        .flatten()
        .copied()
        .collect()
});

pub(super) fn set_for(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::Python => &PYTHON_SET,
        Language::Php => &PHP_SET,
        Language::JavaScript => &JAVASCRIPT_SET,
        Language::Sql => &SQL_SET,
    }
}

pub(super) fn any_set() -> &'static HashSet<&'static str> {
    &ANY_SET
}
