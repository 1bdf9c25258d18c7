use crate::error::StoreError;
use crate::store::{VenueQuery, VenueStore};
use encontra_kernel::domain::constants::DEFAULT_LANGUAGE;
use encontra_kernel::domain::region::RegionCode;
use encontra_kernel::domain::venue::VenueDetails;
use std::borrow::Cow;
use tracing::{debug, instrument, warn};

#[encontra_derive::encontra_error]
pub enum LookupError {
    /// No venue matches the query. Final for scoped lookups.
    #[error("Venue not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The store failed or returned an unusable record.
    #[error("Venue store unavailable{}: {source}", format_context(.context))]
    StoreUnavailable { source: StoreError, context: Option<Cow<'static, str>> },
}

impl LookupError {
    fn not_found(query: &VenueQuery) -> Self {
        Self::NotFound { message: query.to_string().into(), context: None }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Resolves venues for `(region, slug)` against a [`VenueStore`].
#[derive(Debug, Clone)]
pub struct VenueLookupCoordinator<S> {
    store: S,
    language: String,
}

impl<S: VenueStore> VenueLookupCoordinator<S> {
    /// Uses the default display language for localized texts.
    pub fn new(store: S) -> Self {
        Self::with_language(store, DEFAULT_LANGUAGE)
    }

    pub fn with_language(store: S, language: impl Into<String>) -> Self {
        Self { store, language: language.into() }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Builds the single query a lookup will issue, or `None` for a blank slug.
    #[must_use]
    pub fn query(region: Option<&str>, slug: &str) -> Option<VenueQuery> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }
        let slug = slug.to_owned();
        Some(match region.and_then(RegionCode::new) {
            Some(region) => VenueQuery::Scoped { region, slug },
            None => VenueQuery::Global { slug },
        })
    }

    /// Looks up a venue with exactly one store read.
    ///
    /// An empty or absent `region` means a global lookup; a blank `slug` is
    /// `NotFound` without touching the store.
    ///
    /// # Errors
    /// * [`LookupError::NotFound`] when nothing matches, or when the store
    ///   returns a venue outside the requested region.
    /// * [`LookupError::StoreUnavailable`] when the read fails or the record
    ///   does not validate.
    #[instrument(skip(self), fields(language = %self.language))]
    pub async fn lookup(
        &self,
        region: Option<&str>,
        slug: &str,
    ) -> Result<VenueDetails, LookupError> {
        let Some(query) = Self::query(region, slug) else {
            debug!("Blank slug, skipping store read");
            return Err(LookupError::NotFound { message: "blank slug".into(), context: None });
        };

        let record = match self.store.fetch(&query).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(%query, "No venue matched");
                return Err(LookupError::not_found(&query));
            },
            Err(err) => {
                warn!(%query, error = %err, "Venue store read failed");
                return Err(err.into());
            },
        };

        let details = record.into_details(&self.language).map_err(|err| {
            warn!(%query, error = %err, "Stored venue failed validation");
            LookupError::from(StoreError::from(err))
        })?;

        if let Some(region) = query.region()
            && (&details.venue.region_code != region || details.venue.slug != query.slug())
        {
            warn!(
                %query,
                found_region = %details.venue.region_code,
                found_slug = %details.venue.slug,
                "Store returned a venue outside the requested scope"
            );
            return Err(LookupError::not_found(&query));
        }

        debug!(%query, venue = %details.venue.id, "Venue resolved");
        Ok(details)
    }
}
