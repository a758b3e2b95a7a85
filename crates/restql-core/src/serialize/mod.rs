//! Serializer: renders documents and sequences into canonical restQL text.
//!
//! Sections render in a fixed order (modifiers, from/as, headers, timeout,
//! with, only, hidden, ignore-errors). An absent, empty, or false field
//! renders as nothing. Statements of a sequence are joined by a blank line.


use crate::{
    document::{ApplyBindings, BlockKind, QueryDocument, QuerySequence},
    fields::FieldMap,
    value::{Value, format_value},
};
use std::fmt;

/// Separator between statements of a sequence.
pub const STATEMENT_SEPARATOR: &str = "\n\n";

/// Render a document, a sequence, or nothing (empty string).
pub fn stringify(query: impl Into<QuerySequence>) -> String {
    let sequence = query.into();
    let text = stringify_documents(&sequence);
    tracing::trace!(
        statements = sequence.len(),
        bytes = text.len(),
        "stringified query"
    );

    text
}

fn stringify_documents(documents: &[QueryDocument]) -> String {
    documents
        .iter()
        .map(stringify_document)
        .collect::<Vec<_>>()
        .join(STATEMENT_SEPARATOR)
}

/// Render one statement.
#[must_use]
pub fn stringify_document(document: &QueryDocument) -> String {
    [
        modifiers_section(&document.modifiers),
        from_section(document.from.as_deref(), document.alias.as_deref()),
        headers_section(&document.headers),
        timeout_section(document.timeout),
        with_section(&document.with, &document.apply),
        only_section(&document.only, &document.apply),
        flag_section(document.hidden, "hidden"),
        flag_section(document.ignore_errors, "ignore-errors"),
    ]
    .concat()
}

impl fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_document(self))
    }
}

impl fmt::Display for QuerySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify_documents(self))
    }
}

///
/// SECTIONS
///

// `use k = v, ...` anchors the first line, so its newline trails.
fn modifiers_section(modifiers: &FieldMap<Value>) -> String {
    if modifiers.is_empty() {
        return String::new();
    }

    format!("use {}\n", key_value_list(modifiers))
}

fn from_section(endpoint: Option<&str>, alias: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(endpoint) = endpoint.filter(|s| !s.is_empty()) {
        out.push_str("from ");
        out.push_str(endpoint);
    }
    if let Some(alias) = alias.filter(|s| !s.is_empty()) {
        out.push_str(" as ");
        out.push_str(alias);
    }

    out
}

fn headers_section(headers: &FieldMap<Value>) -> String {
    if headers.is_empty() {
        return String::new();
    }

    format!("\nheaders {}", key_value_list(headers))
}

fn timeout_section(timeout: Option<u64>) -> String {
    timeout.map_or_else(String::new, |timeout| format!("\ntimeout = {timeout}"))
}

fn with_section(with: &FieldMap<Value>, apply: &ApplyBindings) -> String {
    if with.is_empty() {
        return String::new();
    }

    let params = with
        .iter()
        .map(|(name, value)| {
            format!(
                "{}{}",
                key_value(name, value),
                apply_suffix(apply, BlockKind::With, name)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("\nwith {params}")
}

fn only_section(only: &[String], apply: &ApplyBindings) -> String {
    if only.is_empty() {
        return String::new();
    }

    let filters = only
        .iter()
        .map(|name| format!("{name}{}", apply_suffix(apply, BlockKind::Only, name)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("\nonly {filters}")
}

fn flag_section(flag: Option<bool>, keyword: &str) -> String {
    if flag == Some(true) {
        format!("\n{keyword}")
    } else {
        String::new()
    }
}

///
/// HELPERS
///

fn key_value(key: &str, value: &Value) -> String {
    format!("{key} = {}", format_value(value))
}

fn key_value_list(entries: &FieldMap<Value>) -> String {
    entries
        .iter()
        .map(|(key, value)| key_value(key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

// ` -> op` when an operator is bound to `target`; nothing for an empty name.
fn apply_suffix(apply: &ApplyBindings, kind: BlockKind, target: &str) -> String {
    match apply.operator(kind, target) {
        Some(operator) if !operator.is_empty() => format!(" -> {operator}"),
        _ => String::new(),
    }
}
