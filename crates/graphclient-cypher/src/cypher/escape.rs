// graphclient - Fluent Cypher statement builder for graph databases
//
// Copyright (c) 2025 graphclient contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cypher string escaping and identifier validation utilities.
//!
//! Every piece of caller-supplied text that is inlined into a statement
//! (rather than bound as a parameter) passes through this module.

use crate::config::QueryConfig;
use crate::error::{CypherError, Result};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

/// Validate a free-text argument against the configured length limit.
///
/// # Examples
///
/// ```
/// # use graphclient_cypher::cypher::validate_string_length;
/// # use graphclient_cypher::QueryConfig;
/// let config = QueryConfig::default().with_max_string_length(16);
/// assert!(validate_string_length("(n:User)", "pattern", &config).is_ok());
/// assert!(validate_string_length(&"x".repeat(17), "pattern", &config).is_err());
/// ```
pub fn validate_string_length(s: &str, argument: &'static str, config: &QueryConfig) -> Result<()> {
    if let Some(max_length) = config.max_string_length {
        let length = s.len();
        if length > max_length {
            return Err(CypherError::StringLengthExceeded {
                length,
                max_length,
                argument,
            });
        }
    }
    Ok(())
}

/// Validate a required free-text clause argument.
///
/// The text must contain something other than whitespace and fit within
/// the configured length limit. Returns the trimmed text.
pub fn validate_clause_text<'a>(
    s: &'a str,
    argument: &'static str,
    config: &QueryConfig,
) -> Result<&'a str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CypherError::argument(argument, "must not be empty"));
    }
    validate_string_length(trimmed, argument, config)?;
    Ok(trimmed)
}

#[inline]
fn needs_escaping(s: &str) -> bool {
    s.chars().any(|ch| matches!(ch, '\\' | '\'' | '"' | '\n' | '\r' | '\t' | '\x00'))
}

/// Escape a string value for use inside a quoted Cypher literal.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
///
/// # Examples
///
/// ```
/// # use graphclient_cypher::cypher::escape_string;
/// let clean = escape_string("file:///data/users.csv");
/// assert!(matches!(clean, std::borrow::Cow::Borrowed(_)));
///
/// let dirty = escape_string("it's");
/// assert_eq!(dirty, "it\\'s");
/// ```
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x00' => escaped.push_str("\\u0000"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Quote a string value for Cypher with single quotes.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", escape_string(s))
}

/// Check if a string is a plain Cypher identifier.
///
/// Plain identifiers start with a letter or underscore, and contain only
/// letters, digits, and underscores.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate and return a plain Cypher identifier, or error if invalid.
pub fn validate_identifier<'a>(s: &'a str, argument: &'static str) -> Result<&'a str> {
    if is_valid_identifier(s) {
        Ok(s)
    } else {
        Err(CypherError::argument(
            argument,
            format!("'{}' is not a valid identifier", s),
        ))
    }
}

/// Normalize a string to NFC (Canonical Composition) form.
///
/// ```
/// # use graphclient_cypher::cypher::normalize_unicode;
/// let composed = "caf\u{00E9}";
/// let decomposed = "cafe\u{0301}";
/// assert_eq!(normalize_unicode(composed), normalize_unicode(decomposed));
/// ```
pub fn normalize_unicode(s: &str) -> String {
    s.nfc().collect()
}

/// Control, zero-width and bidi formatting characters.
fn is_dangerous_unicode(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200B}'
                | '\u{200C}'
                | '\u{200D}'
                | '\u{FEFF}'
                | '\u{202A}'
                | '\u{202B}'
                | '\u{202C}'
                | '\u{202D}'
                | '\u{202E}'
                | '\u{2066}'
                | '\u{2067}'
                | '\u{2068}'
                | '\u{2069}'
                | '\u{00AD}'
                | '\u{061C}'
                | '\u{180E}'
        )
}

pub(crate) fn sanitize_identifier(s: &str) -> String {
    normalize_unicode(s)
        .chars()
        .filter(|c| !is_dangerous_unicode(*c))
        .collect()
}

/// Escape an identifier for Cypher using backticks if needed.
///
/// The input is NFC-normalized and stripped of invisible or control
/// characters first. Reserved words are always quoted.
///
/// ```
/// # use graphclient_cypher::cypher::escape_identifier;
/// assert_eq!(escape_identifier("row"), "row");
/// assert_eq!(escape_identifier("my row"), "`my row`");
/// assert_eq!(escape_identifier("MATCH"), "`MATCH`");
/// ```
pub fn escape_identifier(s: &str) -> String {
    let sanitized = sanitize_identifier(s);

    if is_valid_identifier(&sanitized) && !is_cypher_keyword(&sanitized) {
        sanitized
    } else {
        format!("`{}`", sanitized.replace('`', "``"))
    }
}

/// Render a binding identifier (the name after `AS`) for a clause.
///
/// Empty identifiers are rejected. With
/// [`QueryConfig::strict_identifiers`] set, identifiers that would need
/// backtick quoting are rejected as well.
pub fn render_binding_identifier(
    s: &str,
    argument: &'static str,
    config: &QueryConfig,
) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CypherError::argument(argument, "must not be empty"));
    }
    validate_string_length(trimmed, argument, config)?;

    let escaped = escape_identifier(trimmed);
    if escaped.starts_with('`') {
        if config.strict_identifiers {
            return Err(CypherError::argument(
                argument,
                format!("'{}' requires quoting", trimmed),
            ));
        }
        if escaped == "``" {
            return Err(CypherError::argument(argument, "contains no printable characters"));
        }
    }
    Ok(escaped)
}

/// Check if a string is a Cypher reserved keyword.
pub(crate) fn is_cypher_keyword(s: &str) -> bool {
    matches!(
        s.to_uppercase().as_str(),
        "ALL"
            | "AND"
            | "ANY"
            | "AS"
            | "ASC"
            | "ASCENDING"
            | "BY"
            | "CALL"
            | "CASE"
            | "COMMIT"
            | "CONSTRAINT"
            | "CONTAINS"
            | "COUNT"
            | "CREATE"
            | "CSV"
            | "DELETE"
            | "DESC"
            | "DESCENDING"
            | "DETACH"
            | "DISTINCT"
            | "DO"
            | "DROP"
            | "ELSE"
            | "END"
            | "ENDS"
            | "EXISTS"
            | "FALSE"
            | "FILTER"
            | "FOREACH"
            | "IN"
            | "INDEX"
            | "IS"
            | "LIMIT"
            | "LOAD"
            | "MANDATORY"
            | "MATCH"
            | "MERGE"
            | "NODE"
            | "NONE"
            | "NOT"
            | "NULL"
            | "OF"
            | "ON"
            | "OPTIONAL"
            | "OR"
            | "ORDER"
            | "PERIODIC"
            | "REDUCE"
            | "RELATIONSHIP"
            | "REMOVE"
            | "RETURN"
            | "SET"
            | "SINGLE"
            | "SKIP"
            | "SOME"
            | "STARTS"
            | "THEN"
            | "TRUE"
            | "UNION"
            | "UNIQUE"
            | "UNWIND"
            | "USING"
            | "WHEN"
            | "WHERE"
            | "WITH"
            | "XOR"
            | "YIELD"
    )
}
