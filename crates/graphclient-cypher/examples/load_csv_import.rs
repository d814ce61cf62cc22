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

//! Example: assembling a bulk CSV import statement.

use graphclient_cypher::{CypherError, CypherFluentQuery, LoadCsv, QueryConfig};

fn main() -> Result<(), CypherError> {
    println!("=== LOAD CSV Examples ===\n");

    // Example 1: The bare clause
    println!("1. Plain LOAD CSV:");
    let query = CypherFluentQuery::new()
        .load_csv_from("file://localhost/c:/foo/bar.csv", "row")?
        .compile()?;
    println!("   {}", query);
    println!();

    // Example 2: Headers, terminator and batching
    println!("2. Batched import with headers:");
    let load = LoadCsv::builder()
        .source("https://example.com/exports/people.csv")
        .identifier("line")
        .headers(true)
        .field_terminator("|")
        .periodic_commit(1000)
        .build()?;
    let query = CypherFluentQuery::new()
        .load_csv(load)?
        .merge("(p:Person {id: line.id})")?
        .on_create_set("p.name = line.name")?
        .compile()?;
    for clause in query.query_text().split("\r\n") {
        println!("   {}", clause);
    }
    println!();

    // Example 3: Parameters travel next to the text
    println!("3. Parameterized follow-up:");
    let query = CypherFluentQuery::new()
        .unwind_values(vec!["alice", "bob"], "name")?
        .match_("(p:Person {name: name})")?
        .return_("p")?
        .limit(5)?
        .compile()?;
    println!("   body: {}", query.to_json()?);
    println!("   inline: {}", query.render_inline().replace("\r\n", " "));
    println!();

    // Example 4: Rejected input leaves the builder usable
    println!("4. Validation:");
    let base = CypherFluentQuery::with_config(QueryConfig::for_untrusted_input()).with("n")?;
    match base.load_csv_from("", "row") {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   rejected: {}", e),
    }
    println!("   builder still compiles to: {}", base.compile()?);

    Ok(())
}
