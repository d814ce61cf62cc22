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

//! The fluent statement builder.
//!
//! [`CypherFluentQuery`] is an immutable value: every clause method borrows
//! the receiver and returns a new builder holding one more fragment. A call
//! that fails returns the error and leaves the receiver as it was, so the
//! caller can keep using the last good state.

use crate::config::QueryConfig;
use crate::cypher::{render_binding_identifier, validate_clause_text, CypherValue};
use crate::error::{CypherError, Result};
use crate::fragment::{Clause, Fragment, PeriodicCommit};
use crate::load_csv::LoadCsv;
use crate::params::ParameterTable;
use crate::statement::{CypherQuery, CLAUSE_SEPARATOR};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Chainable Cypher statement builder.
///
/// # Examples
///
/// ```
/// # use graphclient_cypher::CypherFluentQuery;
/// let query = CypherFluentQuery::new()
///     .match_("(u:User)")?
///     .where_("u.active = true")?
///     .return_("u.name")?
///     .limit(10)?
///     .compile()?;
///
/// assert_eq!(
///     query.query_text(),
///     "MATCH (u:User)\r\nWHERE u.active = true\r\nRETURN u.name\r\nLIMIT $p0"
/// );
/// assert_eq!(query.parameter("p0").and_then(|v| v.as_int()), Some(10));
/// # Ok::<(), graphclient_cypher::CypherError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CypherFluentQuery {
    config: Arc<QueryConfig>,
    fragments: Vec<Fragment>,
    parameters: ParameterTable,
    next_parameter: usize,
}

impl CypherFluentQuery {
    /// An empty statement with the default configuration.
    pub fn new() -> Self {
        Self::with_config(QueryConfig::default())
    }

    /// An empty statement with a custom configuration.
    pub fn with_config(config: QueryConfig) -> Self {
        let parameters = ParameterTable::with_prefix(&config.parameter_prefix);
        Self {
            config: Arc::new(config),
            fragments: Vec::new(),
            parameters,
            next_parameter: 0,
        }
    }

    /// The configuration shared by this chain.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Fragments in render order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Parameters attached with [`with_param`](Self::with_param).
    ///
    /// Bindings generated by individual clauses live on their fragments and
    /// only appear together after [`compile`](Self::compile).
    pub fn named_parameters(&self) -> &ParameterTable {
        &self.parameters
    }

    /// Check whether any part of the chain already binds `name`.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
            || self
                .fragments
                .iter()
                .filter_map(Fragment::parameters)
                .any(|table| table.contains_key(name))
    }

    /// Append a fragment, returning the extended builder.
    ///
    /// Fails with [`CypherError::ClauseLimitExceeded`] when the configured
    /// clause limit would be exceeded.
    pub fn append(&self, fragment: impl Into<Fragment>) -> Result<Self> {
        let fragment = fragment.into();
        let count = self.fragments.len() + 1;
        if let Some(max_count) = self.config.max_clauses {
            if count > max_count {
                return Err(CypherError::ClauseLimitExceeded { count, max_count });
            }
        }

        trace!("Appending {:?} clause #{}", fragment.kind(), count);

        let mut next = self.clone();
        next.fragments.push(fragment);
        Ok(next)
    }

    /// Render the statement text and collect every parameter.
    ///
    /// Clauses are joined with [`CLAUSE_SEPARATOR`] in append order.
    /// Compiling does not consume the builder and always yields the same
    /// result for the same builder.
    pub fn compile(&self) -> Result<CypherQuery> {
        let mut text = String::new();
        let mut parameters = self.parameters.clone();

        for (index, fragment) in self.fragments.iter().enumerate() {
            if index > 0 {
                text.push_str(CLAUSE_SEPARATOR);
            }
            text.push_str(&fragment.render());

            if let Some(bindings) = fragment.parameters() {
                parameters = parameters.merge(bindings.clone()).map_err(|e| {
                    warn!("Parameter collision in clause #{}: {}", index + 1, e);
                    e
                })?;
            }
        }

        debug!(
            "Compiled statement: {} clauses, {} parameters, {} bytes",
            self.fragments.len(),
            parameters.len(),
            text.len()
        );

        Ok(CypherQuery::new(text, parameters))
    }

    // ------------------------------------------------------------------
    // Clause helpers
    // ------------------------------------------------------------------

    fn keyword_clause(&self, keyword: &str, text: &str, argument: &'static str) -> Result<Self> {
        let text = validate_clause_text(text, argument, &self.config)?;
        self.append(Clause::new(format!("{} {}", keyword, text)))
    }

    /// Bind `value` under a fresh key and append the clause `render(key)`.
    fn bound_clause(
        &self,
        value: CypherValue,
        render: impl FnOnce(&str) -> String,
    ) -> Result<Self> {
        let mut table = ParameterTable::with_prefix(&self.config.parameter_prefix)
            .starting_at(self.next_parameter);
        let key = table.bind_excluding(value, |k| self.has_parameter(k));
        let next_parameter = table.next_index();

        let mut next = self.append(Clause::with_parameters(render(&key), table))?;
        next.next_parameter = next_parameter;
        Ok(next)
    }

    // ------------------------------------------------------------------
    // Data loading
    // ------------------------------------------------------------------

    /// `USING PERIODIC COMMIT [n]` as a standalone directive.
    ///
    /// `0` leaves the batch size to the server. Like every other clause it is
    /// appended after whatever the builder already holds.
    pub fn using_periodic_commit(&self, batch_size: u64) -> Result<Self> {
        self.append(PeriodicCommit::new(batch_size))
    }

    /// Append a `LOAD CSV` clause.
    ///
    /// The clause renders after any prior clauses, periodic-commit prefix
    /// included; clause grammar is left to the server.
    pub fn load_csv(&self, load: LoadCsv) -> Result<Self> {
        render_binding_identifier(load.identifier(), "identifier", &self.config)?;
        self.append(load)
    }

    /// `LOAD CSV FROM '<source>' AS <identifier>`.
    pub fn load_csv_from(&self, source: &str, identifier: &str) -> Result<Self> {
        self.load_csv(LoadCsv::new(source, identifier)?)
    }

    // ------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------

    /// `MATCH <pattern>`.
    pub fn match_(&self, pattern: &str) -> Result<Self> {
        self.keyword_clause("MATCH", pattern, "pattern")
    }

    /// `OPTIONAL MATCH <pattern>`.
    pub fn optional_match(&self, pattern: &str) -> Result<Self> {
        self.keyword_clause("OPTIONAL MATCH", pattern, "pattern")
    }

    /// `WHERE <predicate>`.
    pub fn where_(&self, predicate: &str) -> Result<Self> {
        self.keyword_clause("WHERE", predicate, "predicate")
    }

    /// `AND <predicate>`, continuing a `WHERE`.
    pub fn and_where(&self, predicate: &str) -> Result<Self> {
        self.keyword_clause("AND", predicate, "predicate")
    }

    /// `OR <predicate>`, continuing a `WHERE`.
    pub fn or_where(&self, predicate: &str) -> Result<Self> {
        self.keyword_clause("OR", predicate, "predicate")
    }

    /// `CALL <procedure>`.
    pub fn call(&self, procedure: &str) -> Result<Self> {
        self.keyword_clause("CALL", procedure, "procedure")
    }

    /// `YIELD <items>`.
    pub fn yield_(&self, items: &str) -> Result<Self> {
        self.keyword_clause("YIELD", items, "items")
    }

    // ------------------------------------------------------------------
    // Projection and chaining
    // ------------------------------------------------------------------

    /// `WITH <items>`.
    pub fn with(&self, items: &str) -> Result<Self> {
        self.keyword_clause("WITH", items, "items")
    }

    /// `UNWIND <expression> AS <identifier>`.
    pub fn unwind(&self, expression: &str, identifier: &str) -> Result<Self> {
        let expression = validate_clause_text(expression, "expression", &self.config)?;
        let identifier = render_binding_identifier(identifier, "identifier", &self.config)?;
        self.append(Clause::new(format!("UNWIND {} AS {}", expression, identifier)))
    }

    /// `UNWIND $pN AS <identifier>`, binding `values` as a list parameter.
    pub fn unwind_values(&self, values: impl Into<CypherValue>, identifier: &str) -> Result<Self> {
        let values = values.into();
        if values.as_list().is_none() {
            return Err(CypherError::argument("values", "must be a list"));
        }
        let identifier = render_binding_identifier(identifier, "identifier", &self.config)?;
        self.bound_clause(values, |key| format!("UNWIND ${} AS {}", key, identifier))
    }

    /// `RETURN <items>`.
    pub fn return_(&self, items: &str) -> Result<Self> {
        self.keyword_clause("RETURN", items, "items")
    }

    /// `RETURN DISTINCT <items>`.
    pub fn return_distinct(&self, items: &str) -> Result<Self> {
        self.keyword_clause("RETURN DISTINCT", items, "items")
    }

    /// `ORDER BY <items>`.
    pub fn order_by(&self, items: &str) -> Result<Self> {
        self.keyword_clause("ORDER BY", items, "items")
    }

    /// `ORDER BY <items> DESC`.
    pub fn order_by_descending(&self, items: &str) -> Result<Self> {
        let items = validate_clause_text(items, "items", &self.config)?;
        self.append(Clause::new(format!("ORDER BY {} DESC", items)))
    }

    /// `SKIP $pN`, binding `count`.
    pub fn skip(&self, count: u64) -> Result<Self> {
        let count = to_cypher_int(count, "count")?;
        self.bound_clause(count, |key| format!("SKIP ${}", key))
    }

    /// `LIMIT $pN`, binding `count`.
    pub fn limit(&self, count: u64) -> Result<Self> {
        let count = to_cypher_int(count, "count")?;
        self.bound_clause(count, |key| format!("LIMIT ${}", key))
    }

    /// `UNION`.
    pub fn union(&self) -> Result<Self> {
        self.append(Clause::new("UNION"))
    }

    /// `UNION ALL`.
    pub fn union_all(&self) -> Result<Self> {
        self.append(Clause::new("UNION ALL"))
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// `CREATE <pattern>`.
    pub fn create(&self, pattern: &str) -> Result<Self> {
        self.keyword_clause("CREATE", pattern, "pattern")
    }

    /// `MERGE <pattern>`.
    pub fn merge(&self, pattern: &str) -> Result<Self> {
        self.keyword_clause("MERGE", pattern, "pattern")
    }

    /// `ON CREATE SET <items>`.
    pub fn on_create_set(&self, items: &str) -> Result<Self> {
        self.keyword_clause("ON CREATE SET", items, "items")
    }

    /// `ON MATCH SET <items>`.
    pub fn on_match_set(&self, items: &str) -> Result<Self> {
        self.keyword_clause("ON MATCH SET", items, "items")
    }

    /// `SET <items>`.
    pub fn set(&self, items: &str) -> Result<Self> {
        self.keyword_clause("SET", items, "items")
    }

    /// `REMOVE <items>`.
    pub fn remove(&self, items: &str) -> Result<Self> {
        self.keyword_clause("REMOVE", items, "items")
    }

    /// `DELETE <items>`.
    pub fn delete(&self, items: &str) -> Result<Self> {
        self.keyword_clause("DELETE", items, "items")
    }

    /// `DETACH DELETE <items>`.
    pub fn detach_delete(&self, items: &str) -> Result<Self> {
        self.keyword_clause("DETACH DELETE", items, "items")
    }

    // ------------------------------------------------------------------
    // Escape hatches
    // ------------------------------------------------------------------

    /// Append clause text verbatim.
    pub fn clause(&self, text: &str) -> Result<Self> {
        let text = validate_clause_text(text, "text", &self.config)?;
        self.append(Clause::new(text))
    }

    /// Attach a named parameter for use as `$name` in clause text.
    ///
    /// Fails with [`CypherError::DuplicateParameter`] when the name is
    /// already bound anywhere in the chain.
    pub fn with_param(&self, name: &str, value: impl Into<CypherValue>) -> Result<Self> {
        if self.has_parameter(name) {
            return Err(CypherError::DuplicateParameter(name.to_string()));
        }
        let mut next = self.clone();
        next.parameters.insert(name, value)?;
        Ok(next)
    }

    /// Attach several named parameters; none are attached if any fails.
    pub fn with_params<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<CypherValue>,
    {
        params
            .into_iter()
            .try_fold(self.clone(), |query, (name, value)| {
                query.with_param(name.as_ref(), value)
            })
    }
}

fn to_cypher_int(value: u64, argument: &'static str) -> Result<CypherValue> {
    i64::try_from(value)
        .map(CypherValue::Int)
        .map_err(|_| CypherError::argument(argument, format!("{} exceeds the Cypher integer range", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::FragmentKind;

    const SOURCE: &str = "file://localhost/c:/foo/bar.csv";

    #[test]
    fn test_empty_compiles_to_empty_text() {
        let query = CypherFluentQuery::new().compile().unwrap();
        assert_eq!(query.query_text(), "");
        assert!(!query.has_parameters());
    }

    #[test]
    fn test_append_does_not_touch_receiver() {
        let base = CypherFluentQuery::new().with("n").unwrap();
        let extended = base.load_csv_from(SOURCE, "row").unwrap();

        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(base.compile().unwrap().query_text(), "WITH n");
    }

    #[test]
    fn test_clauses_join_with_crlf() {
        let query = CypherFluentQuery::new()
            .match_("(n)")
            .unwrap()
            .return_("n")
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(query.query_text(), "MATCH (n)\r\nRETURN n");
    }

    #[test]
    fn test_generated_parameters_are_sequential() {
        let query = CypherFluentQuery::new()
            .match_("(n)")
            .unwrap()
            .return_("n")
            .unwrap()
            .skip(5)
            .unwrap()
            .limit(10)
            .unwrap()
            .compile()
            .unwrap();

        assert!(query.query_text().ends_with("SKIP $p0\r\nLIMIT $p1"));
        assert_eq!(query.parameter("p0"), Some(&CypherValue::Int(5)));
        assert_eq!(query.parameter("p1"), Some(&CypherValue::Int(10)));
    }

    #[test]
    fn test_branches_share_numbering_only_up_to_the_fork() {
        let base = CypherFluentQuery::new().skip(1).unwrap();
        let a = base.limit(2).unwrap().compile().unwrap();
        let b = base.limit(3).unwrap().compile().unwrap();

        assert_eq!(a.query_text(), "SKIP $p0\r\nLIMIT $p1");
        assert_eq!(b.query_text(), "SKIP $p0\r\nLIMIT $p1");
        assert_eq!(a.parameter("p1"), Some(&CypherValue::Int(2)));
        assert_eq!(b.parameter("p1"), Some(&CypherValue::Int(3)));
    }

    #[test]
    fn test_generated_keys_skip_named_parameters() {
        let query = CypherFluentQuery::new()
            .with_param("p0", "taken")
            .unwrap()
            .limit(1)
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(query.query_text(), "LIMIT $p1");
        assert_eq!(query.parameters().len(), 2);
    }

    #[test]
    fn test_with_param_duplicate() {
        let query = CypherFluentQuery::new().limit(1).unwrap();
        let err = query.with_param("p0", 5i64).unwrap_err();
        assert!(matches!(err, CypherError::DuplicateParameter(ref k) if k == "p0"));

        let named = CypherFluentQuery::new().with_param("name", "Alice").unwrap();
        assert!(named.with_param("name", "Bob").is_err());
        assert_eq!(named.named_parameters().get("name"), Some(&CypherValue::from("Alice")));
    }

    #[test]
    fn test_with_params_is_all_or_nothing() {
        let base = CypherFluentQuery::new();
        let err = base
            .with_params(vec![("a", 1i64), ("b", 2), ("a", 3)])
            .unwrap_err();
        assert!(matches!(err, CypherError::DuplicateParameter(_)));
        assert!(base.named_parameters().is_empty());

        let ok = base.with_params(vec![("a", 1i64), ("b", 2)]).unwrap();
        assert_eq!(ok.named_parameters().len(), 2);
    }

    #[test]
    fn test_compile_detects_colliding_fragments() {
        let mut first = ParameterTable::new();
        first.bind(1i64);
        let mut second = ParameterTable::new();
        second.bind(2i64);

        let query = CypherFluentQuery::new()
            .append(Clause::with_parameters("SKIP $p0", first))
            .unwrap()
            .append(Clause::with_parameters("LIMIT $p0", second))
            .unwrap();

        let err = query.compile().unwrap_err();
        assert!(matches!(err, CypherError::DuplicateParameter(ref k) if k == "p0"));
    }

    #[test]
    fn test_clause_limit() {
        let config = QueryConfig::default().with_max_clauses(2);
        let query = CypherFluentQuery::with_config(config)
            .match_("(n)")
            .unwrap()
            .return_("n")
            .unwrap();

        let err = query.limit(1).unwrap_err();
        assert!(matches!(
            err,
            CypherError::ClauseLimitExceeded { count: 3, max_count: 2 }
        ));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_failed_bound_clause_keeps_counter() {
        let config = QueryConfig::default().with_max_clauses(1);
        let query = CypherFluentQuery::with_config(config).skip(1).unwrap();
        assert!(query.limit(1).is_err());
        assert_eq!(query.compile().unwrap().query_text(), "SKIP $p0");
    }

    #[test]
    fn test_empty_arguments_rejected() {
        let query = CypherFluentQuery::new();
        for result in [
            query.match_(""),
            query.where_("  "),
            query.with(""),
            query.return_("\r\n"),
            query.clause(""),
            query.unwind("", "x"),
            query.unwind("[1, 2]", ""),
        ] {
            assert!(result.unwrap_err().is_argument_error());
        }
    }

    #[test]
    fn test_string_length_limit_applies_to_clause_text() {
        let config = QueryConfig::default().with_max_string_length(8);
        let query = CypherFluentQuery::with_config(config);
        assert!(query.match_("(n:User)").is_ok());
        assert!(matches!(
            query.match_("(n:Customer)").unwrap_err(),
            CypherError::StringLengthExceeded { argument: "pattern", .. }
        ));
    }

    #[test]
    fn test_unwind_values() {
        let query = CypherFluentQuery::new()
            .unwind_values(vec![1i64, 2, 3], "id")
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(query.query_text(), "UNWIND $p0 AS id");
        assert_eq!(query.parameter("p0").and_then(|v| v.as_list()).map(|l| l.len()), Some(3));

        let err = CypherFluentQuery::new().unwind_values(5i64, "id").unwrap_err();
        assert!(matches!(err, CypherError::Argument { argument: "values", .. }));
    }

    #[test]
    fn test_skip_out_of_range() {
        let err = CypherFluentQuery::new().skip(u64::MAX).unwrap_err();
        assert!(matches!(err, CypherError::Argument { argument: "count", .. }));
    }

    #[test]
    fn test_periodic_load_after_prior_clause() {
        let with = CypherFluentQuery::new().with("n").unwrap();
        let load = LoadCsv::new(SOURCE, "row").unwrap().with_periodic_commit(1000);
        let expected =
            "WITH n\r\nUSING PERIODIC COMMIT 1000 LOAD CSV FROM 'file://localhost/c:/foo/bar.csv' AS row";

        let via_load_csv = with.load_csv(load.clone()).unwrap().compile().unwrap();
        let via_append = with.append(load).unwrap().compile().unwrap();
        assert_eq!(via_load_csv.query_text(), expected);
        assert_eq!(via_append, via_load_csv);

        let directive = with.using_periodic_commit(100).unwrap().compile().unwrap();
        assert_eq!(directive.query_text(), "WITH n\r\nUSING PERIODIC COMMIT 100");
    }

    #[test]
    fn test_standalone_periodic_commit_then_load() {
        let query = CypherFluentQuery::new()
            .using_periodic_commit(500)
            .unwrap()
            .load_csv_from(SOURCE, "row")
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(
            query.query_text(),
            "USING PERIODIC COMMIT 500\r\nLOAD CSV FROM 'file://localhost/c:/foo/bar.csv' AS row"
        );
    }

    #[test]
    fn test_strict_identifiers_apply_to_load_csv() {
        let query = CypherFluentQuery::with_config(QueryConfig::default().with_strict_identifiers());
        assert!(query.load_csv_from(SOURCE, "row").is_ok());
        assert!(query.load_csv_from(SOURCE, "line item").unwrap_err().is_argument_error());
    }

    #[test]
    fn test_fragment_kinds() {
        let query = CypherFluentQuery::new()
            .with("n")
            .unwrap()
            .load_csv_from(SOURCE, "row")
            .unwrap();
        let kinds: Vec<FragmentKind> = query.fragments().iter().map(Fragment::kind).collect();
        assert_eq!(
            kinds,
            vec![FragmentKind::PassThrough, FragmentKind::LoadCsv]
        );
    }

    #[test]
    fn test_custom_parameter_prefix() {
        let config = QueryConfig::default().with_parameter_prefix("arg");
        let query = CypherFluentQuery::with_config(config)
            .limit(3)
            .unwrap()
            .compile()
            .unwrap();
        assert_eq!(query.query_text(), "LIMIT $arg0");
    }
}
