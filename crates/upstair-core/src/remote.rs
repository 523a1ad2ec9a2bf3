// Bridges the HTTP client to the engine's source trait
use async_trait::async_trait;
use upstair_api::{FilteredScholarship, RawScholarship, SearchClient};

use crate::{models::FilterCriteria, source::RecordSource, Error, Result};

/// The production [`RecordSource`]: a wrapper over the SearCh HTTP client.
pub struct RemoteSource {
    client: SearchClient,
}

impl RemoteSource {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for RemoteSource {
    async fn fetch_all(&self) -> Result<Vec<RawScholarship>> {
        self.client
            .list_scholarships()
            .await
            .map_err(|e| Error::ApiError(e.to_string()))
    }

    async fn fetch_filtered(&self, criteria: FilterCriteria) -> Result<Vec<FilteredScholarship>> {
        self.client
            .filter_scholarships(criteria.min_gpa, criteria.grade, &criteria.status)
            .await
            .map_err(|e| Error::ApiError(e.to_string()))
    }
}
