use chrono::{DateTime, FixedOffset};
use encontra_domain::config::EngineConfig;
use encontra_domain::plan::CapabilitySet;
use encontra_domain::region::RegionCode;
use encontra_domain::venue::VenueDetails;
use encontra_kernel::clock::{ClockError, SystemClock};
use encontra_schedule::{OpenStatus, ScheduleIssue};
use encontra_tenancy::RegionResolver;
use encontra_venues::{LookupError, VenueLookupCoordinator, VenueStore};
use serde::Serialize;
use tracing::{debug, warn};

/// Request metadata after tenant resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub host: String,
    /// `None` is the global scope (apex, `www`, unparseable hosts).
    pub region: Option<RegionCode>,
}

impl RequestContext {
    #[must_use]
    pub fn region_code(&self) -> Option<&str> {
        self.region.as_ref().map(RegionCode::as_str)
    }
}

/// Everything a venue page renders from, computed for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueView {
    pub region: Option<RegionCode>,
    pub details: VenueDetails,
    pub capabilities: CapabilitySet,
    pub open: OpenStatus,
    pub can_create_coupon: bool,
}

/// The composed engine. Stateless apart from its configuration and store handle.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    config: EngineConfig,
    resolver: RegionResolver,
    venues: VenueLookupCoordinator<S>,
}

impl<S: VenueStore> Engine<S> {
    pub fn new(config: EngineConfig, store: S) -> Self {
        let resolver = RegionResolver::new(&config.tenancy);
        let venues = VenueLookupCoordinator::with_language(store, &config.locale.default_language);
        Self { config, resolver, venues }
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn venues(&self) -> &VenueLookupCoordinator<S> {
        &self.venues
    }

    /// Wall clock in the configured venue-local offset.
    ///
    /// # Errors
    /// Returns [`ClockError::Offset`] for an out-of-range `utc_offset_minutes`.
    pub fn clock(&self) -> Result<SystemClock, ClockError> {
        SystemClock::from_offset_minutes(self.config.locale.utc_offset_minutes)
    }

    #[must_use]
    pub fn request_context(&self, host: &str) -> RequestContext {
        RequestContext { host: host.to_owned(), region: self.resolver.resolve(host) }
    }

    /// Looks up a venue in the request's scope and reports schedule data problems.
    ///
    /// # Errors
    /// See [`VenueLookupCoordinator::lookup`].
    pub async fn lookup(
        &self,
        context: &RequestContext,
        slug: &str,
    ) -> Result<VenueDetails, LookupError> {
        let details = self.venues.lookup(context.region_code(), slug).await?;
        if let Some(schedule) = &details.venue.schedule {
            for issue in encontra_schedule::diagnose(schedule) {
                match issue {
                    ScheduleIssue::MalformedTime { .. } => {
                        warn!(venue = %details.venue.id, %issue, "Schedule has a malformed time");
                    },
                    ScheduleIssue::Overlap { .. } => {
                        debug!(venue = %details.venue.id, %issue, "Schedule ranges overlap");
                    },
                }
            }
        }
        Ok(details)
    }

    /// Resolves the tenant, looks up the venue and derives its facts at `now`.
    ///
    /// # Errors
    /// See [`VenueLookupCoordinator::lookup`].
    pub async fn view(
        &self,
        host: &str,
        slug: &str,
        now: &DateTime<FixedOffset>,
    ) -> Result<VenueView, LookupError> {
        let context = self.request_context(host);
        let details = self.lookup(&context, slug).await?;

        let capabilities = encontra_plans::resolve_subscription(&details.venue.subscription);
        let open = encontra_schedule::evaluate(&details.venue, now);
        let can_create_coupon =
            encontra_plans::allows_another_coupon(&capabilities, details.active_coupon_count());

        Ok(VenueView { region: context.region, details, capabilities, open, can_create_coupon })
    }

    /// Coupon rule for an already fetched venue and its current coupons.
    #[must_use]
    pub fn can_create_coupon(&self, details: &VenueDetails) -> bool {
        encontra_plans::can_create_coupon(&details.venue, details.active_coupon_count())
    }
}
