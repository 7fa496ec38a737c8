//! Declaration Document: the serializable extraction output.
//!
//! Stable key names (`imports`, `global_variables`, `functions`,
//! `classes`; nested `arguments`, `returns`, `body`, `methods`) round-trip
//! through serde_json unchanged. `returns` serializes as `null` when
//! absent; method entries always have it absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The structured description of one file's top-level declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDoc {
    /// Verbatim import statements, insertion order.
    pub imports: Vec<String>,
    /// Module-level assignments: name to textual form of the value.
    pub global_variables: BTreeMap<String, String>,
    /// Module-level function definitions.
    pub functions: BTreeMap<String, FunctionDecl>,
    /// Module-level class definitions.
    pub classes: BTreeMap<String, ClassDecl>,
}

/// One function (or method) entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Positional parameter names only.
    pub arguments: Vec<String>,
    /// Textual form of the first direct-child return expression.
    pub returns: Option<String>,
    /// Definition source with the header line and return lines removed,
    /// each line stripped of surrounding whitespace.
    pub body: String,
}

/// One class entry: direct-child function definitions only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub methods: BTreeMap<String, FunctionDecl>,
}
