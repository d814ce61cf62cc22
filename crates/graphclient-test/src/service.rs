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

//! Graph services that never touch the network.

use graphclient_cypher::{CypherQuery, GraphService};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors raised by the in-memory services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service refused the statement.
    #[error("statement rejected: {0}")]
    Rejected(String),
}

/// Records every statement it is asked to execute.
#[derive(Debug, Default)]
pub struct RecordingGraphService {
    executed: Mutex<Vec<CypherQuery>>,
}

impl RecordingGraphService {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CypherQuery>> {
        // A panicking test thread must not hide what was recorded before it.
        self.executed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Statements executed so far, oldest first.
    pub fn executed(&self) -> Vec<CypherQuery> {
        self.lock().clone()
    }

    /// The most recent statement.
    pub fn last(&self) -> Option<CypherQuery> {
        self.lock().last().cloned()
    }

    /// Number of statements executed.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was executed.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl GraphService for RecordingGraphService {
    type Error = ServiceError;

    fn execute(&self, query: &CypherQuery) -> Result<(), ServiceError> {
        self.lock().push(query.clone());
        Ok(())
    }
}

/// Rejects every statement with a fixed reason.
#[derive(Debug, Clone)]
pub struct FailingGraphService {
    reason: String,
}

impl FailingGraphService {
    /// Create a service rejecting with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl GraphService for FailingGraphService {
    type Error = ServiceError;

    fn execute(&self, _query: &CypherQuery) -> Result<(), ServiceError> {
        Err(ServiceError::Rejected(self.reason.clone()))
    }
}
