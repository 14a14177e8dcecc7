use serde_json::Value;

use crate::descriptor::{QueryDescriptor, QueryNode};
use crate::filter::{FilterValue, WhereClause};
use crate::sort::OrderTerm;

/// A partial update for one query node.
///
/// `where` entries merge key by key: each is inserted or overwritten,
/// existing keys are never removed. Every other field present here
/// replaces the node's field wholesale (replacing `order` replaces the
/// entire sort list, it does not append).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub r#where: WhereClause,
    pub attributes: Option<Vec<String>>,
    pub order: Option<Vec<OrderTerm>>,
    pub include: Option<Vec<QueryNode>>,
    pub alias: Option<String>,
    pub required: Option<bool>,
}

impl NodePatch {
    pub fn where_entry(field: impl Into<String>, value: FilterValue) -> Self {
        NodePatch::default().and_where(field, value)
    }

    pub fn and_where(mut self, field: impl Into<String>, value: FilterValue) -> Self {
        self.r#where.insert(field.into(), value);
        self
    }

    pub fn order(terms: Vec<OrderTerm>) -> Self {
        NodePatch {
            order: Some(terms),
            ..NodePatch::default()
        }
    }
}

/// What a patch did. A `Miss` leaves the descriptor untouched; it is up
/// to the caller to log or assert, the descriptor itself stays silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied { datasource: String },
    Miss,
}

impl PatchOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

impl QueryDescriptor {
    /// Patch the first node whose `datasource` matches: the root when it
    /// matches, otherwise the first match in a pre-order depth-first walk
    /// of `include`. Later nodes with the same name are left untouched.
    /// When nothing matches the descriptor is unchanged.
    pub fn apply_patch(&mut self, datasource: &str, patch: &NodePatch) -> PatchOutcome {
        match self.find_node_mut(datasource) {
            Some(node) => {
                node.apply_patch(patch);
                PatchOutcome::Applied {
                    datasource: node.datasource.clone(),
                }
            }
            None => PatchOutcome::Miss,
        }
    }

    /// First node matching `datasource`, in the same traversal order
    /// `apply_patch` uses.
    pub fn find_node(&self, datasource: &str) -> Option<&QueryNode> {
        find_in(&self.get_this_data, datasource)
    }

    pub fn find_node_mut(&mut self, datasource: &str) -> Option<&mut QueryNode> {
        find_in_mut(&mut self.get_this_data, datasource)
    }

    /// Dynamic field read off the first matching node, as JSON. `None`
    /// when no node matches or the field is absent from the wire form
    /// (an empty `order`, say). Callers use this to inspect the current
    /// sort before toggling it.
    pub fn read_field(&self, datasource: &str, key: &str) -> Option<Value> {
        let node = self.find_node(datasource)?;
        let value = serde_json::to_value(node).ok()?;
        value.get(key).cloned()
    }
}

impl QueryNode {
    pub fn apply_patch(&mut self, patch: &NodePatch) {
        for (field, value) in &patch.r#where {
            self.r#where.insert(field.clone(), value.clone());
        }
        if let Some(attributes) = &patch.attributes {
            self.attributes = attributes.clone();
        }
        if let Some(order) = &patch.order {
            self.order = order.clone();
        }
        if let Some(include) = &patch.include {
            self.include = include.clone();
        }
        if let Some(alias) = &patch.alias {
            self.alias = Some(alias.clone());
        }
        if let Some(required) = patch.required {
            self.required = Some(required);
        }
    }
}

fn find_in<'a>(node: &'a QueryNode, datasource: &str) -> Option<&'a QueryNode> {
    if node.datasource == datasource {
        return Some(node);
    }
    node.include
        .iter()
        .find_map(|child| find_in(child, datasource))
}

fn find_in_mut<'a>(node: &'a mut QueryNode, datasource: &str) -> Option<&'a mut QueryNode> {
    if node.datasource == datasource {
        return Some(node);
    }
    node.include
        .iter_mut()
        .find_map(|child| find_in_mut(child, datasource))
}
