use crate::error::StoreError;
use crate::record::VenueRecord;
use encontra_kernel::domain::region::RegionCode;
use std::fmt;
use std::sync::Arc;

/// One read against a [`VenueStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VenueQuery {
    /// Match by slug alone, regardless of region.
    Global { slug: String },
    /// Match `region_code == region AND slug == slug`.
    Scoped { region: RegionCode, slug: String },
}

impl VenueQuery {
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::Global { slug } | Self::Scoped { slug, .. } => slug,
        }
    }

    #[must_use]
    pub const fn region(&self) -> Option<&RegionCode> {
        match self {
            Self::Global { .. } => None,
            Self::Scoped { region, .. } => Some(region),
        }
    }
}

impl fmt::Display for VenueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global { slug } => write!(f, "*/{slug}"),
            Self::Scoped { region, slug } => write!(f, "{region}/{slug}"),
        }
    }
}

/// Read-only venue source.
///
/// `Ok(None)` is a miss; `Err` means the store itself failed. Implementations
/// answer each query with a single read and no retries.
pub trait VenueStore: Send + Sync {
    fn fetch(
        &self,
        query: &VenueQuery,
    ) -> impl Future<Output = Result<Option<VenueRecord>, StoreError>> + Send;
}

impl<S: VenueStore> VenueStore for Arc<S> {
    fn fetch(
        &self,
        query: &VenueQuery,
    ) -> impl Future<Output = Result<Option<VenueRecord>, StoreError>> + Send {
        (**self).fetch(query)
    }
}
