// The fetch -> normalize pipeline behind every listing screen
use tracing::{debug, info};

use crate::models::{FilterCriteria, FilteredRecord, Scholarship};
use crate::normalize::{normalize, normalize_filtered, sort_by_deadline};
use crate::source::RecordSource;
use crate::Result;

/// Loads scholarship listings through a [`RecordSource`].
///
/// Holds no records of its own: every load fetches fresh and the returned
/// set fully replaces whatever the caller held before. The service has two
/// classification paths that are not guaranteed to agree - the full listing
/// with client-derived recruitment status ([`Catalog::load`]) and the
/// server-classified filtered listing ([`Catalog::load_filtered`]) - so both
/// are exposed and the caller picks per use.
pub struct Catalog {
    source: Box<dyn RecordSource>,
}

impl Catalog {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Fetch the full listing, normalized and ordered by deadline.
    ///
    /// Recruitment status is NOT attached here; callers derive it per
    /// record via [`Scholarship::status_on`] at the moment of display.
    pub async fn load(&self) -> Result<Vec<Scholarship>> {
        debug!("Fetching full scholarship listing");
        let raw = self.source.fetch_all().await?;

        let mut records: Vec<Scholarship> = raw.into_iter().map(normalize).collect();
        sort_by_deadline(&mut records);

        info!("Loaded {} scholarships", records.len());
        Ok(records)
    }

    /// Fetch the server-classified filtered listing.
    pub async fn load_filtered(&self, criteria: FilterCriteria) -> Result<Vec<FilteredRecord>> {
        debug!(
            "Fetching filtered listing (gpa {}, grade {}, status {})",
            criteria.min_gpa, criteria.grade, criteria.status
        );
        let raw = self.source.fetch_filtered(criteria).await?;

        let records: Vec<FilteredRecord> = raw.into_iter().map(normalize_filtered).collect();

        info!("Server returned {} filtered scholarships", records.len());
        Ok(records)
    }
}
