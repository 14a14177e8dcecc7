use std::time::Duration;

use campus_query::QueryDescriptor;
use ureq::Agent;

use crate::context::WorkspaceContext;
use crate::error::ClientError;
use crate::response::{Envelope, SearchPage};

/// The fixed search endpoints. Which one a screen uses is part of its
/// static configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEndpoint {
    SearchRecord,
    SearchCourse,
}

impl SearchEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            SearchEndpoint::SearchRecord => "/searchRecord",
            SearchEndpoint::SearchCourse => "/searchCourse",
        }
    }
}

/// Blocking client for the search endpoints. POSTs a whole descriptor
/// and returns the normalized page.
pub struct SearchClient {
    agent: Agent,
    base_url: String,
}

impl SearchClient {
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Self::TIMEOUT))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn search(
        &self,
        ctx: &WorkspaceContext,
        endpoint: SearchEndpoint,
        descriptor: &QueryDescriptor,
    ) -> Result<SearchPage, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!(
            endpoint = endpoint.path(),
            org = %ctx.org,
            limit = descriptor.limit,
            offset = descriptor.offset,
            "posting search descriptor"
        );

        let body = serde_json::to_vec(descriptor)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let mut response = self
            .agent
            .post(&url)
            .header("x-current-org", &ctx.org)
            .content_type("application/json; charset=utf-8")
            .send(&body)?;

        let body = response.body_mut().read_to_string()?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(envelope.into_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(SearchEndpoint::SearchRecord.path(), "/searchRecord");
        assert_eq!(SearchEndpoint::SearchCourse.path(), "/searchCourse");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = SearchClient::new("http://localhost:9700/");
        assert_eq!(client.base_url, "http://localhost:9700");
    }
}
