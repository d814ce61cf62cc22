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

//! Shared test fixtures and utilities for graphclient.
//!
//! # Quick Start
//!
//! ```rust
//! use graphclient_test::{fixtures, RecordingGraphService};
//! use graphclient_cypher::submit;
//!
//! // Canonical sources and prebuilt statements
//! let load = fixtures::sample_load();
//! let query = fixtures::with_n().load_csv(load).unwrap();
//!
//! // Capture what would have been sent to the server
//! let service = RecordingGraphService::new();
//! submit(&service, &query).unwrap().unwrap();
//! assert_eq!(service.len(), 1);
//! ```

use graphclient_cypher::CypherFluentQuery;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> CypherFluentQuery)>;

/// Canonical sources, builders and invalid inputs.
pub mod fixtures;

/// In-memory [`GraphService`](graphclient_cypher::GraphService) implementations.
pub mod service;

pub use service::{FailingGraphService, RecordingGraphService, ServiceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_compile() {
        for (name, fixture_fn) in fixtures::all() {
            let query = fixture_fn();
            assert!(query.compile().is_ok(), "Fixture {} should compile", name);
        }
    }

    #[test]
    fn test_with_n_fixture() {
        let query = fixtures::with_n().compile().unwrap();
        assert_eq!(query.query_text(), "WITH n");
    }

    #[test]
    fn test_import_users_fixture_binds_nothing() {
        let query = fixtures::import_users().compile().unwrap();
        assert!(query
            .query_text()
            .starts_with("USING PERIODIC COMMIT 500 LOAD CSV WITH HEADERS"));
        assert!(!query.has_parameters());
    }

    #[test]
    fn test_paged_users_fixture_binds_paging() {
        let query = fixtures::paged_users().compile().unwrap();
        assert_eq!(query.parameters().len(), 3);
    }
}
