use async_trait::async_trait;
use upstair_api::{FilteredScholarship, RawScholarship};

use crate::{models::FilterCriteria, Result};

/// The seam between the engine and the network collaborator.
///
/// The engine never initiates, retries, or cancels requests itself - it
/// consumes a completed result set delivered exactly once per call. Keeping
/// this behind a trait means the catalog tests run against a scripted
/// source instead of a live backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// The full listing, raw off the wire.
    async fn fetch_all(&self) -> Result<Vec<RawScholarship>>;

    /// The server-classified filtered listing.
    async fn fetch_filtered(&self, criteria: FilterCriteria) -> Result<Vec<FilteredScholarship>>;
}
