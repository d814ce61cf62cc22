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

//! The seam between statement building and statement execution.

use crate::error::Result;
use crate::query::CypherFluentQuery;
use crate::statement::CypherQuery;
use tracing::debug;

/// Something that can run a compiled statement against a graph database.
///
/// Transport, sessions, retries and result decoding all live behind this
/// trait; the builder only ever hands over a finished [`CypherQuery`].
pub trait GraphService {
    /// Error reported by the service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute a compiled statement.
    fn execute(&self, query: &CypherQuery) -> std::result::Result<(), Self::Error>;
}

impl<S: GraphService + ?Sized> GraphService for &S {
    type Error = S::Error;

    fn execute(&self, query: &CypherQuery) -> std::result::Result<(), Self::Error> {
        (**self).execute(query)
    }
}

/// Outcome of [`submit`]: the statement compiled, then the service ran it or
/// reported its own error.
pub type Submission<E> = std::result::Result<CypherQuery, E>;

/// Compile `query` and pass it to `service`.
///
/// Compilation errors come back in the outer `Result`; the service's own
/// error in the inner one. On success the compiled statement is returned.
pub fn submit<S: GraphService>(
    service: &S,
    query: &CypherFluentQuery,
) -> Result<Submission<S::Error>> {
    let compiled = query.compile()?;
    debug!(
        "Submitting statement with {} parameters",
        compiled.parameters().len()
    );
    Ok(service.execute(&compiled).map(|()| compiled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
        refuse: bool,
    }

    impl GraphService for Recorder {
        type Error = Refused;

        fn execute(&self, query: &CypherQuery) -> std::result::Result<(), Refused> {
            if self.refuse {
                return Err(Refused);
            }
            self.seen.borrow_mut().push(query.query_text().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_submit_compiles_and_executes() {
        let recorder = Recorder::default();
        let query = CypherFluentQuery::new().match_("(n)").unwrap().return_("n").unwrap();

        let compiled = submit(&recorder, &query).unwrap().unwrap();
        assert_eq!(compiled.query_text(), "MATCH (n)\r\nRETURN n");
        assert_eq!(recorder.seen.borrow().as_slice(), ["MATCH (n)\r\nRETURN n"]);
    }

    #[test]
    fn test_submit_through_reference() {
        let recorder = Recorder::default();
        let by_ref = &recorder;
        submit(&by_ref, &CypherFluentQuery::new().return_("1").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(recorder.seen.borrow().len(), 1);
    }

    #[test]
    fn test_service_error_is_passed_through() {
        let recorder = Recorder {
            refuse: true,
            ..Default::default()
        };
        let outcome = submit(&recorder, &CypherFluentQuery::new()).unwrap();
        assert!(outcome.is_err());
    }
}
