use serde::Deserialize;
use serde_json::Value;

/// One page of search results, normalized from the endpoint's envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

/// Success bodies arrive as `{ "data": { results, totalCount, ... } }`,
/// except for the endpoints that wrap a second time:
/// `{ "data": { "data": { ... } } }`. Both decode to the same page.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    data: EnvelopeData,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeData {
    // Checked first: a page never carries a `data` key of its own.
    Nested { data: SearchPage },
    Page(SearchPage),
}

impl Envelope {
    pub(crate) fn into_page(self) -> SearchPage {
        match self.data {
            EnvelopeData::Nested { data } => data,
            EnvelopeData::Page(page) => page,
        }
    }
}
