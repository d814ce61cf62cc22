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

//! Clause fragments.
//!
//! A [`Fragment`] is one clause of a statement before it is joined with its
//! neighbours. Fragments are validated when they are built and rendering
//! never fails; a fragment's text depends only on the fragment itself.

use crate::load_csv::LoadCsv;
use crate::params::ParameterTable;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Leading keywords of a periodic-commit directive.
const PERIODIC_COMMIT_KEYWORDS: &str = "USING PERIODIC COMMIT";

/// The kind of clause a fragment holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FragmentKind {
    /// Standalone `USING PERIODIC COMMIT` directive.
    PeriodicCommit,
    /// `LOAD CSV` data load.
    LoadCsv,
    /// Prerendered clause text.
    PassThrough,
}

/// A single clause of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Standalone periodic-commit directive.
    PeriodicCommit(PeriodicCommit),
    /// `LOAD CSV` clause.
    LoadCsv(LoadCsv),
    /// Clause text rendered by an earlier call, with its own bindings.
    PassThrough(Clause),
}

impl Fragment {
    /// Render the clause text.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Fragment::PeriodicCommit(directive) => Cow::Owned(directive.to_string()),
            Fragment::LoadCsv(load) => Cow::Owned(load.to_string()),
            Fragment::PassThrough(clause) => Cow::Borrowed(&clause.text),
        }
    }

    /// Parameters this fragment introduces, if any.
    pub fn parameters(&self) -> Option<&ParameterTable> {
        match self {
            Fragment::PassThrough(clause) if !clause.parameters.is_empty() => {
                Some(&clause.parameters)
            }
            _ => None,
        }
    }

    /// Which kind of clause this is.
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::PeriodicCommit(_) => FragmentKind::PeriodicCommit,
            Fragment::LoadCsv(_) => FragmentKind::LoadCsv,
            Fragment::PassThrough(_) => FragmentKind::PassThrough,
        }
    }
}

impl From<LoadCsv> for Fragment {
    fn from(load: LoadCsv) -> Self {
        Fragment::LoadCsv(load)
    }
}

impl From<Clause> for Fragment {
    fn from(clause: Clause) -> Self {
        Fragment::PassThrough(clause)
    }
}

impl From<PeriodicCommit> for Fragment {
    fn from(directive: PeriodicCommit) -> Self {
        Fragment::PeriodicCommit(directive)
    }
}

/// Prerendered clause text plus the parameters it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    text: String,
    parameters: ParameterTable,
}

impl Clause {
    /// A clause with no parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: ParameterTable::new(),
        }
    }

    /// A clause referencing the given bindings.
    pub fn with_parameters(text: impl Into<String>, parameters: ParameterTable) -> Self {
        Self {
            text: text.into(),
            parameters,
        }
    }

    /// Clause text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bindings introduced by this clause.
    pub fn parameters(&self) -> &ParameterTable {
        &self.parameters
    }
}

/// `USING PERIODIC COMMIT [n]`.
///
/// A batch size of zero leaves the size to the server and renders no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PeriodicCommit {
    batch_size: u64,
}

impl PeriodicCommit {
    /// Directive with the given batch size (`0` = server default).
    pub fn new(batch_size: u64) -> Self {
        Self { batch_size }
    }

    /// Directive without an explicit batch size.
    pub fn server_default() -> Self {
        Self::default()
    }

    /// Configured batch size, `None` when the server default applies.
    pub fn batch_size(&self) -> Option<u64> {
        (self.batch_size > 0).then_some(self.batch_size)
    }
}

impl fmt::Display for PeriodicCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.batch_size() {
            Some(size) => write!(f, "{} {}", PERIODIC_COMMIT_KEYWORDS, size),
            None => f.write_str(PERIODIC_COMMIT_KEYWORDS),
        }
    }
}
