use serde::{Deserialize, Serialize};

use crate::filter::WhereClause;
use crate::sort::OrderTerm;

/// The full request payload for a search endpoint: a pagination window
/// plus the root of the query tree.
///
/// One descriptor is built per screen from a literal template, patched in
/// response to user interaction, and sent wholesale on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub limit: u64,
    pub offset: u64,
    #[serde(rename = "getThisData")]
    pub get_this_data: QueryNode,
}

impl QueryDescriptor {
    pub fn new(limit: u64, root: QueryNode) -> Self {
        Self {
            limit,
            offset: 0,
            get_this_data: root,
        }
    }
}

/// One datasource-scoped filter/sort/projection specification, possibly
/// nested under a parent node via `include`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryNode {
    /// Logical entity/table name; the lookup key for patches.
    pub datasource: String,
    /// Fields to project. Empty means all fields and is left off the wire.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub r#where: WhereClause,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<OrderTerm>,
    /// Joined datasources, in join order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<QueryNode>,
    #[serde(default, rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl QueryNode {
    pub fn new(datasource: impl Into<String>) -> Self {
        Self {
            datasource: datasource.into(),
            attributes: Vec::new(),
            r#where: WhereClause::new(),
            order: Vec::new(),
            include: Vec::new(),
            alias: None,
            required: None,
        }
    }

    pub fn with_include(mut self, child: QueryNode) -> Self {
        self.include.push(child);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }
}
