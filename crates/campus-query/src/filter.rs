use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to filter value map for one query node.
///
/// Always serialized, even when empty: the search endpoints expect
/// `"where": {}` on every node.
pub type WhereClause = BTreeMap<String, FilterValue>;

/// A single `where` entry: either a bare literal (implicit equality, the
/// server's interpretation) or an operator object like `{"$like": "%x%"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Operator(FilterOperator),
    Literal(Value),
}

impl FilterValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        FilterValue::Literal(value.into())
    }

    pub fn like(pattern: impl Into<String>) -> Self {
        FilterValue::Operator(FilterOperator::Like(pattern.into()))
    }

    /// Substring match: wraps `text` in `%` wildcards. An empty string
    /// yields the match-all pattern `%%`.
    pub fn contains(text: &str) -> Self {
        Self::like(format!("%{text}%"))
    }
}

/// Operator-tagged filter values, spelled on the wire exactly as the
/// search endpoints expect them (`$like`, `$between`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "$eq")]
    Eq(Value),
    #[serde(rename = "$ne")]
    Ne(Value),
    #[serde(rename = "$like")]
    Like(String),
    #[serde(rename = "$notLike")]
    NotLike(String),
    #[serde(rename = "$in")]
    In(Vec<Value>),
    #[serde(rename = "$gt")]
    Gt(Value),
    #[serde(rename = "$gte")]
    Gte(Value),
    #[serde(rename = "$lt")]
    Lt(Value),
    #[serde(rename = "$lte")]
    Lte(Value),
    #[serde(rename = "$between")]
    Between(Value, Value),
    #[serde(rename = "$or")]
    Or(Vec<WhereClause>),
}
