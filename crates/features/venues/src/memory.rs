use crate::error::{StoreError, StoreErrorExt};
use crate::record::VenueRecord;
use crate::store::{VenueQuery, VenueStore};
use encontra_kernel::domain::region::RegionCode;
use std::sync::Arc;
use tracing::debug;

/// Immutable in-memory store, used for fixtures and the probe CLI.
///
/// Slugs are compared exactly, region codes case-insensitively. When several
/// records share a slug the first one in load order wins a global lookup.
#[derive(Debug, Clone, Default)]
pub struct MemoryVenueStore {
    records: Arc<[VenueRecord]>,
}

impl MemoryVenueStore {
    pub fn from_records(records: impl IntoIterator<Item = VenueRecord>) -> Self {
        Self { records: records.into_iter().collect() }
    }

    /// Loads a JSON array of venue documents.
    ///
    /// # Errors
    /// Returns [`StoreError::Malformed`] if any document does not parse.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records =
            serde_json::from_str::<Vec<VenueRecord>>(json).context("Loading venue fixtures")?;
        debug!(count = records.len(), "Venue fixtures loaded");
        Ok(Self::from_records(records))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[VenueRecord] {
        &self.records
    }

    fn find(&self, query: &VenueQuery) -> Option<&VenueRecord> {
        self.records.iter().find(|record| {
            let in_region = |region: &RegionCode| {
                record.region_code.trim().eq_ignore_ascii_case(region.as_str())
            };
            record.slug.trim() == query.slug() && query.region().is_none_or(in_region)
        })
    }
}

impl VenueStore for MemoryVenueStore {
    async fn fetch(&self, query: &VenueQuery) -> Result<Option<VenueRecord>, StoreError> {
        Ok(self.find(query).cloned())
    }
}
