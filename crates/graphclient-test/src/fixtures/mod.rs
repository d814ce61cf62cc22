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

//! Canonical statements and inputs.
//!
//! - **queries**: prebuilt builder states
//! - **errors**: inputs every builder entry point must reject

pub mod errors;
mod queries;

pub use queries::*;

use crate::FixtureList;

/// Locator used by the reference `LOAD CSV` scenarios.
pub const SAMPLE_CSV_SOURCE: &str = "file://localhost/c:/foo/bar.csv";

/// Binding identifier used by the reference `LOAD CSV` scenarios.
pub const SAMPLE_ROW: &str = "row";

/// Returns all query fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("empty", empty),
        ("with_n", with_n),
        ("load_sample", load_sample),
        ("import_users", import_users),
        ("paged_users", paged_users),
    ]
}
