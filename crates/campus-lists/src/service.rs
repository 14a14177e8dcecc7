use campus_client::{SearchClient, SearchPage, WorkspaceContext};

use crate::config::ListConfig;
use crate::error::ListError;
use crate::state::{ListState, RequestToken};

/// Drives one list screen: pairs the screen's configuration with a
/// search client and runs each request through the sequencing guard.
pub struct ListService {
    client: SearchClient,
    config: ListConfig,
}

impl ListService {
    pub fn new(client: SearchClient, config: ListConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Fresh screen state from the configured initial descriptor.
    pub fn state(&self) -> ListState {
        ListState::new(&self.config)
    }

    /// Execute the search for the state's current descriptor.
    ///
    /// Returns `Ok(None)` when a newer request was issued while this one
    /// was in flight; the response is stale and must not be rendered.
    pub fn fetch(
        &self,
        ctx: &WorkspaceContext,
        state: &mut ListState,
        token: RequestToken,
    ) -> Result<Option<SearchPage>, ListError> {
        let page = self
            .client
            .search(ctx, self.config.endpoint, state.descriptor())?;

        if state.accept(token) {
            Ok(Some(page))
        } else {
            tracing::debug!(list = %self.config.id, "dropping stale search response");
            Ok(None)
        }
    }
}
