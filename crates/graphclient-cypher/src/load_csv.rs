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

//! The `LOAD CSV` clause.
//!
//! The source locator is always inlined as a quoted literal: `LOAD CSV`
//! does not accept a parameter in the `FROM` position.

use crate::cypher::escape::sanitize_identifier;
use crate::cypher::{escape_identifier, escape_string};
use crate::error::{CypherError, Result};
use crate::fragment::PeriodicCommit;
use std::fmt;
use url::Url;

/// A validated `LOAD CSV` clause.
///
/// Rendered as
/// `[USING PERIODIC COMMIT [n] ]LOAD CSV[ WITH HEADERS] FROM '<source>' AS <identifier>[ FIELDTERMINATOR '<t>']`.
///
/// # Examples
///
/// ```
/// # use graphclient_cypher::LoadCsv;
/// let load = LoadCsv::new("file://localhost/c:/foo/bar.csv", "row")?
///     .with_headers()
///     .with_field_terminator("|")?;
/// assert_eq!(
///     load.to_string(),
///     "LOAD CSV WITH HEADERS FROM 'file://localhost/c:/foo/bar.csv' AS row FIELDTERMINATOR '|'"
/// );
/// # Ok::<(), graphclient_cypher::CypherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCsv {
    source: String,
    identifier: String,
    with_headers: bool,
    field_terminator: Option<String>,
    periodic_commit: Option<PeriodicCommit>,
}

impl LoadCsv {
    /// Load from an absolute URI given as text, binding each row to `identifier`.
    ///
    /// Fails with [`CypherError::Argument`] when the source is empty or not an
    /// absolute URI, or the identifier is empty.
    pub fn new(source: &str, identifier: &str) -> Result<Self> {
        let source = validate_source(source)?;
        let identifier = validate_identifier(identifier)?;
        Ok(Self::unchecked(source, identifier))
    }

    /// Load from a parsed URI.
    pub fn from_url(source: &Url, identifier: &str) -> Result<Self> {
        let identifier = validate_identifier(identifier)?;
        Ok(Self::unchecked(source.as_str().to_string(), identifier))
    }

    /// Start building a clause field by field.
    pub fn builder() -> LoadCsvBuilder {
        LoadCsvBuilder::default()
    }

    fn unchecked(source: String, identifier: String) -> Self {
        Self {
            source,
            identifier,
            with_headers: false,
            field_terminator: None,
            periodic_commit: None,
        }
    }

    /// Treat the first line as column headers (`WITH HEADERS`).
    pub fn with_headers(mut self) -> Self {
        self.with_headers = true;
        self
    }

    /// Use a custom field terminator.
    pub fn with_field_terminator(mut self, terminator: &str) -> Result<Self> {
        self.field_terminator = Some(validate_terminator(terminator)?);
        Ok(self)
    }

    /// Prefix the clause with `USING PERIODIC COMMIT`.
    ///
    /// `0` renders the directive without a batch size.
    pub fn with_periodic_commit(mut self, batch_size: u64) -> Self {
        self.periodic_commit = Some(PeriodicCommit::new(batch_size));
        self
    }

    /// Source locator as it will be rendered.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Row binding identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Whether `WITH HEADERS` is rendered.
    pub fn has_headers(&self) -> bool {
        self.with_headers
    }

    /// Custom field terminator, if any.
    pub fn field_terminator(&self) -> Option<&str> {
        self.field_terminator.as_deref()
    }

    /// Periodic-commit prefix, if any.
    pub fn periodic_commit(&self) -> Option<PeriodicCommit> {
        self.periodic_commit
    }
}

impl fmt::Display for LoadCsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(directive) = &self.periodic_commit {
            write!(f, "{} ", directive)?;
        }
        f.write_str("LOAD CSV")?;
        if self.with_headers {
            f.write_str(" WITH HEADERS")?;
        }
        write!(
            f,
            " FROM '{}' AS {}",
            escape_string(&self.source),
            escape_identifier(&self.identifier)
        )?;
        if let Some(terminator) = &self.field_terminator {
            write!(f, " FIELDTERMINATOR '{}'", escape_string(terminator))?;
        }
        Ok(())
    }
}

/// Field-by-field construction of a [`LoadCsv`], validated on [`build`](Self::build).
///
/// ```
/// # use graphclient_cypher::LoadCsv;
/// let err = LoadCsv::builder().identifier("row").build().unwrap_err();
/// assert!(err.is_argument_error());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadCsvBuilder {
    source: Option<String>,
    identifier: Option<String>,
    with_headers: bool,
    field_terminator: Option<String>,
    periodic_commit: Option<u64>,
}

impl LoadCsvBuilder {
    /// Set the source locator.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the source locator from a parsed URI.
    pub fn source_url(mut self, source: &Url) -> Self {
        self.source = Some(source.as_str().to_string());
        self
    }

    /// Set the row binding identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set whether the first line holds column headers.
    pub fn headers(mut self, with_headers: bool) -> Self {
        self.with_headers = with_headers;
        self
    }

    /// Set a custom field terminator.
    pub fn field_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.field_terminator = Some(terminator.into());
        self
    }

    /// Set the periodic-commit batch size (`0` = server default).
    pub fn periodic_commit(mut self, batch_size: u64) -> Self {
        self.periodic_commit = Some(batch_size);
        self
    }

    /// Validate and build the clause.
    pub fn build(self) -> Result<LoadCsv> {
        let source = self
            .source
            .ok_or_else(|| CypherError::argument("source", "a source locator is required"))?;
        let identifier = self
            .identifier
            .ok_or_else(|| CypherError::argument("identifier", "a binding identifier is required"))?;

        let mut load = LoadCsv::new(&source, &identifier)?;
        load.with_headers = self.with_headers;
        if let Some(terminator) = self.field_terminator {
            load = load.with_field_terminator(&terminator)?;
        }
        if let Some(batch_size) = self.periodic_commit {
            load = load.with_periodic_commit(batch_size);
        }
        Ok(load)
    }
}

fn validate_source(source: &str) -> Result<String> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(CypherError::argument("source", "must not be null or empty"));
    }
    Url::parse(trimmed).map_err(|e| {
        CypherError::argument("source", format!("'{}' is not an absolute URI: {}", trimmed, e))
    })?;
    Ok(trimmed.to_string())
}

fn validate_identifier(identifier: &str) -> Result<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(CypherError::argument("identifier", "must not be empty"));
    }
    if sanitize_identifier(trimmed).trim().is_empty() {
        return Err(CypherError::argument(
            "identifier",
            "must contain a visible character",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_terminator(terminator: &str) -> Result<String> {
    if terminator.is_empty() {
        return Err(CypherError::argument(
            "field_terminator",
            "must contain at least one character",
        ));
    }
    Ok(terminator.to_string())
}
