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

//! Behaviour of the in-memory graph services.

use graphclient_cypher::{submit, CypherError, CypherFluentQuery};
use graphclient_test::{fixtures, FailingGraphService, RecordingGraphService, ServiceError};
use std::sync::Arc;
use std::thread;

#[test]
fn test_recorder_keeps_statements_in_order() {
    let service = RecordingGraphService::new();
    assert!(service.is_empty());

    submit(&service, &fixtures::with_n()).unwrap().unwrap();
    submit(&service, &fixtures::paged_users()).unwrap().unwrap();

    let executed = service.executed();
    assert_eq!(executed.len(), 2);
    assert_eq!(executed[0].query_text(), "WITH n");
    assert_eq!(
        service.last().map(|q| q.parameters().len()),
        Some(3)
    );
}

#[test]
fn test_failing_service_reports_reason() {
    let service = FailingGraphService::new("read-only replica");
    let outcome = submit(&service, &fixtures::load_sample()).unwrap();
    assert_eq!(
        outcome.unwrap_err(),
        ServiceError::Rejected("read-only replica".to_string())
    );
}

#[test]
fn test_compile_errors_never_reach_the_service() {
    let service = RecordingGraphService::new();
    let colliding = CypherFluentQuery::new()
        .append(graphclient_cypher::Clause::with_parameters("SKIP $p0", {
            let mut t = graphclient_cypher::ParameterTable::new();
            t.bind(1i64);
            t
        }))
        .unwrap()
        .append(graphclient_cypher::Clause::with_parameters("LIMIT $p0", {
            let mut t = graphclient_cypher::ParameterTable::new();
            t.bind(2i64);
            t
        }))
        .unwrap();

    let err = submit(&service, &colliding).unwrap_err();
    assert!(matches!(err, CypherError::DuplicateParameter(_)));
    assert!(service.is_empty());
}

#[test]
fn test_statements_built_on_separate_threads_are_independent() {
    let service = Arc::new(RecordingGraphService::new());

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let query = CypherFluentQuery::new()
                    .match_("(n)")
                    .and_then(|q| q.return_("n"))
                    .and_then(|q| q.skip(i))
                    .and_then(|q| q.limit(i + 1))
                    .unwrap();
                submit(service.as_ref(), &query).unwrap().unwrap()
            })
        })
        .collect();

    for handle in handles {
        let compiled = handle.join().unwrap();
        assert!(compiled.query_text().ends_with("SKIP $p0\r\nLIMIT $p1"));
    }
    assert_eq!(service.len(), 4);
}
