use campus_query::{
    FilterValue, NodePatch, OrderTerm, PatchOutcome, QueryDescriptor, SortDirection,
};

use crate::config::{ListConfig, SearchTarget};

/// Tag for one issued request. Tokens are ordered; only the newest one
/// may publish its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// The live state of one list screen: its descriptor plus the bookkeeping
/// that keeps overlapping responses from racing each other.
///
/// Every interaction patches the descriptor and hands back a
/// [`RequestToken`]; the caller re-issues the search with the current
/// descriptor and offers the response back through [`ListState::accept`].
pub struct ListState {
    descriptor: QueryDescriptor,
    search: SearchTarget,
    issued: u64,
    accepted: u64,
}

impl ListState {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            descriptor: config.initial.clone(),
            search: config.search.clone(),
            issued: 0,
            accepted: 0,
        }
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    /// Free-text search. Patches the configured field with a `%text%`
    /// pattern and jumps back to the first page. Empty text patches the
    /// field to the match-all pattern; the key is never removed.
    pub fn set_search(&mut self, text: &str) -> RequestToken {
        let datasource = self.search.datasource.clone();
        let patch = NodePatch::where_entry(self.search.field.as_str(), FilterValue::contains(text));
        let outcome = self.descriptor.apply_patch(&datasource, &patch);
        warn_on_miss(&datasource, &outcome);
        self.descriptor.offset = 0;
        self.next_token()
    }

    /// Sort-header click. First click sorts ascending, clicking the
    /// current sort field flips it. Replaces the node's whole `order`.
    pub fn toggle_sort(&mut self, datasource: &str, field: &str) -> RequestToken {
        let current = self
            .descriptor
            .find_node(datasource)
            .and_then(|node| node.order.first())
            .filter(|term| term.field() == field)
            .map(|term| term.direction());
        let direction = match current {
            Some(direction) => direction.toggled(),
            None => SortDirection::Asc,
        };

        let patch = NodePatch::order(vec![OrderTerm::new(field, direction)]);
        let outcome = self.descriptor.apply_patch(datasource, &patch);
        warn_on_miss(datasource, &outcome);
        self.next_token()
    }

    /// Jump to a zero-based page of the current page size.
    pub fn set_page(&mut self, page: u64) -> RequestToken {
        self.descriptor.offset = page * self.descriptor.limit;
        self.next_token()
    }

    pub fn set_page_size(&mut self, limit: u64) -> RequestToken {
        self.descriptor.limit = limit;
        self.descriptor.offset = 0;
        self.next_token()
    }

    /// Arbitrary filter patch against any node in the tree.
    pub fn apply_filter(&mut self, datasource: &str, patch: &NodePatch) -> RequestToken {
        let outcome = self.descriptor.apply_patch(datasource, patch);
        warn_on_miss(datasource, &outcome);
        self.next_token()
    }

    /// Offer a response back. Returns `true` when the token belongs to
    /// the newest issued request and has not been published yet; stale
    /// responses get `false` and must be dropped.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if token.0 == self.issued && token.0 > self.accepted {
            self.accepted = token.0;
            true
        } else {
            false
        }
    }

    fn next_token(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }
}

fn warn_on_miss(datasource: &str, outcome: &PatchOutcome) {
    if !outcome.applied() {
        tracing::warn!(datasource, "patch matched no query node; filter dropped");
    }
}
