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

//! Error types for Cypher statement construction.

use thiserror::Error;

/// Error type for statement building operations.
#[derive(Debug, Error)]
pub enum CypherError {
    /// A clause argument was missing or malformed.
    ///
    /// Raised while the fragment is being constructed, so the builder that
    /// received the call is left unchanged.
    #[error("invalid argument '{argument}': {reason}")]
    Argument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A parameter key was bound twice within one statement.
    #[error("parameter '{0}' is already defined in this query")]
    DuplicateParameter(String),

    /// String length limit exceeded.
    #[error("String length {length} exceeds maximum allowed length {max_length} for argument '{argument}'")]
    StringLengthExceeded {
        /// Actual length of the string.
        length: usize,
        /// Maximum allowed length.
        max_length: usize,
        /// Argument where the violation occurred.
        argument: &'static str,
    },

    /// Clause count limit exceeded.
    #[error("Clause count {count} exceeds maximum allowed count {max_count}")]
    ClauseLimitExceeded {
        /// Number of clauses the statement would hold.
        count: usize,
        /// Maximum allowed clauses.
        max_count: usize,
    },

    /// Serialization error from serde_json.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CypherError {
    /// Shorthand for building an [`CypherError::Argument`].
    pub fn argument(argument: &'static str, reason: impl Into<String>) -> Self {
        CypherError::Argument {
            argument,
            reason: reason.into(),
        }
    }

    /// Whether this error was raised by argument validation.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, CypherError::Argument { .. })
    }
}

/// Result type alias for statement building operations.
pub type Result<T> = std::result::Result<T, CypherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_argument() {
        let err = CypherError::argument("source", "must not be empty");
        let msg = err.to_string();
        assert!(msg.contains("source"));
        assert!(msg.contains("must not be empty"));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_error_display_duplicate_parameter() {
        let err = CypherError::DuplicateParameter("p0".to_string());
        assert!(err.to_string().contains("p0"));
        assert!(!err.is_argument_error());
    }

    #[test]
    fn test_error_display_clause_limit() {
        let err = CypherError::ClauseLimitExceeded {
            count: 11,
            max_count: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: CypherError = json_err.into();
        assert!(matches!(err, CypherError::JsonError(_)));
    }
}
