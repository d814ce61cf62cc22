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

//! Inputs that builder entry points must reject.

/// Source locators `LOAD CSV` must reject, as (name, locator).
pub fn invalid_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \t "),
        ("relative_path", "data/users.csv"),
        ("absolute_path_without_scheme", "/var/lib/import/users.csv"),
        ("no_host_http", "http://"),
    ]
}

/// Binding identifiers that are always rejected, as (name, identifier).
pub fn invalid_identifiers() -> Vec<(&'static str, &'static str)> {
    vec![("empty", ""), ("whitespace_only", "  ")]
}

/// Identifiers accepted only with backtick quoting, as (name, identifier).
pub fn quoted_identifiers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("space", "line item"),
        ("leading_digit", "1row"),
        ("keyword", "match"),
        ("dash", "row-data"),
    ]
}

/// Clause text that every free-text clause must reject, as (name, text).
pub fn blank_clause_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("spaces", "   "),
        ("line_breaks", "\r\n"),
        ("tabs", "\t\t"),
    ]
}
