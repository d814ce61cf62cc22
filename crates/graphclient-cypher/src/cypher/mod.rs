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

//! Cypher text utilities.
//!
//! Escaping, identifier validation and the parameter value type used by
//! every clause.

pub mod escape;
pub mod value;

pub use escape::{
    escape_identifier, escape_string, is_valid_identifier, normalize_unicode, quote_string,
    render_binding_identifier, validate_clause_text, validate_identifier, validate_string_length,
};

pub use value::CypherValue;
