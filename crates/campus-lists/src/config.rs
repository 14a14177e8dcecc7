use campus_client::SearchEndpoint;
use campus_query::QueryDescriptor;

/// Static description of one admin list screen: which endpoint it talks
/// to, the descriptor it starts from, and where its search box filters.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub id: String,
    pub title: String,
    pub endpoint: SearchEndpoint,
    pub initial: QueryDescriptor,
    pub search: SearchTarget,
}

/// The node and field a screen's free-text search patches.
#[derive(Debug, Clone)]
pub struct SearchTarget {
    pub datasource: String,
    pub field: String,
}

impl SearchTarget {
    pub fn new(datasource: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            datasource: datasource.into(),
            field: field.into(),
        }
    }
}
