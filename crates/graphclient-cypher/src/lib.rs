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

//! Fluent, parameterized Cypher statement builder.
//!
//! This crate assembles Cypher statements clause by clause. Each call on
//! [`CypherFluentQuery`] validates its arguments, adds one [`Fragment`] and
//! returns a new builder; [`CypherFluentQuery::compile`] joins the rendered
//! fragments into a [`CypherQuery`] holding the statement text and its
//! parameter table. Running the statement is left to a [`GraphService`].
//!
//! # Fragments
//!
//! | Fragment | Rendered as |
//! |----------|-------------|
//! | [`Fragment::PeriodicCommit`] | `USING PERIODIC COMMIT [n]` |
//! | [`Fragment::LoadCsv`] | `LOAD CSV [WITH HEADERS] FROM '<uri>' AS <id> [FIELDTERMINATOR '<t>']` |
//! | [`Fragment::PassThrough`] | Clause text produced by an earlier call |
//!
//! Clauses are separated by `\r\n` and always render in the order they were
//! added.
//!
//! # Example: bulk import
//!
//! ```rust
//! use graphclient_cypher::{CypherFluentQuery, LoadCsv};
//!
//! fn example() -> Result<(), graphclient_cypher::CypherError> {
//!     let load = LoadCsv::new("file:///import/users.csv", "row")?
//!         .with_headers()
//!         .with_periodic_commit(1000);
//!
//!     let query = CypherFluentQuery::new()
//!         .load_csv(load)?
//!         .merge("(u:User {id: row.id})")?
//!         .on_create_set("u.name = row.name")?
//!         .compile()?;
//!
//!     assert_eq!(
//!         query.query_text(),
//!         "USING PERIODIC COMMIT 1000 LOAD CSV WITH HEADERS FROM 'file:///import/users.csv' AS row\r\n\
//!          MERGE (u:User {id: row.id})\r\n\
//!          ON CREATE SET u.name = row.name"
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: parameters
//!
//! Values that are not part of the query shape are bound as parameters
//! rather than inlined:
//!
//! ```rust
//! use graphclient_cypher::CypherFluentQuery;
//!
//! fn example() -> Result<(), graphclient_cypher::CypherError> {
//!     let query = CypherFluentQuery::new()
//!         .match_("(u:User {name: $name})")?
//!         .with_param("name", "Alice")?
//!         .return_("u")?
//!         .skip(20)?
//!         .limit(10)?
//!         .compile()?;
//!
//!     assert!(query.query_text().ends_with("SKIP $p0\r\nLIMIT $p1"));
//!     assert_eq!(query.parameters().len(), 3);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod cypher;
pub mod error;
pub mod fragment;
pub mod load_csv;
pub mod params;
pub mod query;
pub mod statement;

// Re-export main types at crate root for convenience
pub use client::{submit, GraphService, Submission};
pub use config::{QueryConfig, QueryConfigBuilder, DEFAULT_MAX_STRING_LENGTH, DEFAULT_PARAMETER_PREFIX};
pub use cypher::CypherValue;
pub use error::{CypherError, Result};
pub use fragment::{Clause, Fragment, FragmentKind, PeriodicCommit};
pub use load_csv::{LoadCsv, LoadCsvBuilder};
pub use params::ParameterTable;
pub use query::CypherFluentQuery;
pub use statement::{CypherQuery, CLAUSE_SEPARATOR};
