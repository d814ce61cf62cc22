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

//! Prebuilt builder states.

use super::{SAMPLE_CSV_SOURCE, SAMPLE_ROW};
use graphclient_cypher::{CypherFluentQuery, LoadCsv};

/// An empty builder.
pub fn empty() -> CypherFluentQuery {
    CypherFluentQuery::new()
}

/// A builder holding the single clause `WITH n`.
pub fn with_n() -> CypherFluentQuery {
    CypherFluentQuery::new()
        .with("n")
        .expect("fixture clause is valid")
}

/// `LOAD CSV FROM 'file://localhost/c:/foo/bar.csv' AS row`, unadorned.
pub fn sample_load() -> LoadCsv {
    LoadCsv::new(SAMPLE_CSV_SOURCE, SAMPLE_ROW).expect("fixture source is valid")
}

/// A builder holding only [`sample_load`].
pub fn load_sample() -> CypherFluentQuery {
    CypherFluentQuery::new()
        .load_csv(sample_load())
        .expect("fixture clause is valid")
}

/// A batched user import with headers and a custom terminator.
pub fn import_users() -> CypherFluentQuery {
    let load = LoadCsv::new("file:///import/users.csv", "row")
        .and_then(|l| l.with_headers().with_field_terminator(";"))
        .expect("fixture source is valid")
        .with_periodic_commit(500);

    CypherFluentQuery::new()
        .load_csv(load)
        .and_then(|q| q.merge("(u:User {id: row.id})"))
        .and_then(|q| q.on_create_set("u.name = row.name, u.email = row.email"))
        .expect("fixture clauses are valid")
}

/// A paged lookup binding one named and two generated parameters.
pub fn paged_users() -> CypherFluentQuery {
    CypherFluentQuery::new()
        .match_("(u:User)")
        .and_then(|q| q.where_("u.country = $country"))
        .and_then(|q| q.with_param("country", "NL"))
        .and_then(|q| q.return_("u.name"))
        .and_then(|q| q.order_by("u.name"))
        .and_then(|q| q.skip(20))
        .and_then(|q| q.limit(10))
        .expect("fixture clauses are valid")
}
