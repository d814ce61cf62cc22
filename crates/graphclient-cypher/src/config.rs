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

//! Configuration for statement building.

use serde::{Deserialize, Serialize};

/// Default maximum length for free-text clause arguments: 1 MiB.
///
/// Patterns, predicates and projections are written by hand or generated
/// from small templates; anything larger than this is almost always data
/// that belongs in a parameter instead.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1024 * 1024;

/// Default prefix for generated parameter names (`p0`, `p1`, ...).
pub const DEFAULT_PARAMETER_PREFIX: &str = "p";

/// Configuration for [`CypherFluentQuery`](crate::CypherFluentQuery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Prefix for generated parameter names (default: "p").
    pub parameter_prefix: String,

    /// Maximum byte length of a free-text clause argument (default: 1MB, None = unlimited).
    pub max_string_length: Option<usize>,

    /// Maximum number of clauses in one statement (default: None = unlimited).
    pub max_clauses: Option<usize>,

    /// Reject binding identifiers that would need backtick quoting instead
    /// of quoting them (default: false).
    pub strict_identifiers: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            parameter_prefix: DEFAULT_PARAMETER_PREFIX.to_string(),
            max_string_length: Some(DEFAULT_MAX_STRING_LENGTH),
            max_clauses: None,
            strict_identifiers: false,
        }
    }
}

/// Builder for QueryConfig.
///
/// # Examples
///
/// ```
/// # use graphclient_cypher::QueryConfig;
/// let config = QueryConfig::builder()
///     .parameter_prefix("arg")
///     .max_clauses(32)
///     .build();
/// assert_eq!(config.parameter_prefix, "arg");
/// ```
#[derive(Default)]
pub struct QueryConfigBuilder {
    parameter_prefix: Option<String>,
    max_string_length: Option<Option<usize>>,
    max_clauses: Option<Option<usize>>,
    strict_identifiers: Option<bool>,
}

impl QueryConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix for generated parameter names.
    pub fn parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = Some(prefix.into());
        self
    }

    /// Set maximum length for free-text clause arguments.
    pub fn max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(Some(max));
        self
    }

    /// Remove the string length limit.
    pub fn no_string_length_limit(mut self) -> Self {
        self.max_string_length = Some(None);
        self
    }

    /// Set maximum number of clauses per statement.
    pub fn max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = Some(Some(max));
        self
    }

    /// Set whether identifiers needing backticks are rejected.
    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = Some(strict);
        self
    }

    /// Build the QueryConfig instance.
    ///
    /// All unset fields will use their default values.
    pub fn build(self) -> QueryConfig {
        let defaults = QueryConfig::default();
        QueryConfig {
            parameter_prefix: self.parameter_prefix.unwrap_or(defaults.parameter_prefix),
            max_string_length: self.max_string_length.unwrap_or(defaults.max_string_length),
            max_clauses: self.max_clauses.unwrap_or(defaults.max_clauses),
            strict_identifiers: self.strict_identifiers.unwrap_or(defaults.strict_identifiers),
        }
    }
}

impl QueryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for QueryConfig.
    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::default()
    }

    /// Set the prefix for generated parameter names.
    ///
    /// An empty prefix or one that does not start an identifier falls back
    /// to the default when parameters are generated.
    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }

    /// Set maximum length for free-text clause arguments.
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(max);
        self
    }

    /// Remove the string length limit.
    pub fn without_string_length_limit(mut self) -> Self {
        self.max_string_length = None;
        self
    }

    /// Set maximum number of clauses per statement.
    pub fn with_max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = Some(max);
        self
    }

    /// Reject identifiers that would need backtick quoting.
    pub fn with_strict_identifiers(mut self) -> Self {
        self.strict_identifiers = true;
        self
    }

    /// Create a configuration suitable for statements assembled from
    /// untrusted input.
    ///
    /// - 64KB max argument length
    /// - 256 max clauses
    /// - Strict identifiers
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphclient_cypher::QueryConfig;
    /// let config = QueryConfig::for_untrusted_input();
    /// assert!(config.strict_identifiers);
    /// ```
    pub fn for_untrusted_input() -> Self {
        Self {
            max_string_length: Some(64 * 1024),
            max_clauses: Some(256),
            strict_identifiers: true,
            ..Default::default()
        }
    }
}
