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

//! Compiled statements.

use crate::cypher::CypherValue;
use crate::error::Result;
use crate::params::ParameterTable;
use serde::Serialize;
use std::fmt;

/// Separator placed between rendered clauses.
pub const CLAUSE_SEPARATOR: &str = "\r\n";

/// A compiled statement: query text plus its parameter table.
///
/// Produced by [`CypherFluentQuery::compile`](crate::CypherFluentQuery::compile)
/// and handed to a [`GraphService`](crate::GraphService) for execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    #[serde(rename = "query")]
    query_text: String,
    #[serde(rename = "params")]
    parameters: ParameterTable,
}

impl CypherQuery {
    pub(crate) fn new(query_text: String, parameters: ParameterTable) -> Self {
        Self {
            query_text,
            parameters,
        }
    }

    /// The statement text.
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// The bound parameters.
    pub fn parameters(&self) -> &ParameterTable {
        &self.parameters
    }

    /// Look up one bound parameter.
    pub fn parameter(&self, name: &str) -> Option<&CypherValue> {
        self.parameters.get(name)
    }

    /// Check if this statement has parameters.
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Render the statement with parameter values substituted as literals.
    ///
    /// Meant for logs and debugging output; send [`query_text`](Self::query_text)
    /// and [`parameters`](Self::parameters) to the server instead.
    ///
    /// A placeholder is the full identifier after `$`; unbound placeholders
    /// are kept as written. Substituted text is never scanned again.
    pub fn render_inline(&self) -> String {
        let mut result = String::with_capacity(self.query_text.len());
        let mut rest = self.query_text.as_str();

        while let Some(pos) = rest.find('$') {
            result.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let end = after
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..end];

            match self.parameters.get(name) {
                Some(value) if !name.is_empty() => result.push_str(&value.to_cypher_literal()),
                _ => {
                    result.push('$');
                    result.push_str(name);
                }
            }
            rest = &after[end..];
        }
        result.push_str(rest);
        result
    }

    /// The JSON request body accepted by the HTTP Cypher endpoint:
    /// `{"query": "...", "params": {...}}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Split into text and parameters.
    pub fn into_parts(self) -> (String, ParameterTable) {
        (self.query_text, self.parameters)
    }
}

impl fmt::Display for CypherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_text)
    }
}
