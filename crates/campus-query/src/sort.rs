use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// One sort term. Serializes as a `["field", "ASC"]` pair, the shape the
/// search endpoints expect in a node's `order` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTerm(pub String, pub SortDirection);

impl OrderTerm {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self(field.into(), direction)
    }

    pub fn field(&self) -> &str {
        &self.0
    }

    pub fn direction(&self) -> SortDirection {
        self.1
    }
}
