//! Validated venue snapshots.
//!
//! These are the shapes the decision functions consume. Raw store documents are
//! mapped into them at the ingestion boundary (see the venues slice), so every
//! field here has already been checked.

use crate::constants::STATUS_ACTIVE;
use crate::plan::PlanTier;
use crate::region::RegionCode;
use crate::schedule::WeeklySchedule;
use serde::Serialize;

/// Whether the subscription is currently paid up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    /// Anything other than exactly `"active"` (lapsed, paused, cancelled, …).
    Inactive,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn parse(status: &str) -> Self {
        if status == STATUS_ACTIVE { Self::Active } else { Self::Inactive }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subscription {
    pub plan: PlanTier,
    pub status: SubscriptionStatus,
}

impl Subscription {
    #[must_use]
    pub const fn new(plan: PlanTier, status: SubscriptionStatus) -> Self {
        Self { plan, status }
    }

    #[must_use]
    pub const fn free() -> Self {
        Self::new(PlanTier::Free, SubscriptionStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub slug: String,
    pub region_code: RegionCode,
    pub zone: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subscription: Subscription,
    pub schedule: Option<WeeklySchedule>,
    /// Authoritative open flag when no schedule is configured.
    pub manual_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub caption: Option<String>,
}

/// A venue together with the related collections fetched in the same read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetails {
    pub venue: Venue,
    pub products: Vec<Product>,
    pub coupons: Vec<Coupon>,
    pub gallery: Vec<GalleryImage>,
}

impl VenueDetails {
    #[must_use]
    pub fn active_coupon_count(&self) -> usize {
        self.coupons.iter().filter(|c| c.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_active_is_active() {
        assert!(SubscriptionStatus::parse("active").is_active());
        for status in ["Active", "inactive", "paused", "", " active"] {
            assert!(!SubscriptionStatus::parse(status).is_active(), "{status:?}");
        }
    }
}
