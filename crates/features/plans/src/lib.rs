//! Plans feature slice.
//!
//! A venue's `(plan, status)` pair selects exactly one row of the compiled-in
//! plan table. Nothing here can fail: anything unrecognised or unpaid falls
//! back to the free tier.

use encontra_kernel::domain::plan::{CapabilitySet, PLANS, PlanDefinition, PlanTier};
use encontra_kernel::domain::venue::{Subscription, SubscriptionStatus, Venue};
use tracing::trace;

/// Resolves raw stored strings. Matching is exact and case-sensitive.
#[must_use]
pub fn resolve(plan: &str, status: &str) -> CapabilitySet {
    let tier = effective_tier(PlanTier::parse(plan), SubscriptionStatus::parse(status));
    trace!(plan, status, %tier, "Capabilities resolved");
    tier.capabilities()
}

/// Typed variant of [`resolve`] for already-validated venues.
#[must_use]
pub fn resolve_subscription(subscription: &Subscription) -> CapabilitySet {
    effective_tier(Some(subscription.plan), subscription.status).capabilities()
}

/// The tier whose capabilities actually apply.
#[must_use]
pub fn effective_tier(plan: Option<PlanTier>, status: SubscriptionStatus) -> PlanTier {
    match plan {
        Some(tier) if status.is_active() => tier,
        _ => PlanTier::Free,
    }
}

/// Whether `venue` may activate one more coupon given how many are active now.
#[must_use]
pub fn can_create_coupon(venue: &Venue, active_coupon_count: usize) -> bool {
    allows_another_coupon(&resolve_subscription(&venue.subscription), active_coupon_count)
}

/// Coupon rule on a bare capability set.
#[must_use]
pub fn allows_another_coupon(capabilities: &CapabilitySet, active_coupon_count: usize) -> bool {
    if !capabilities.coupons_enabled() {
        return false;
    }
    capabilities
        .coupon_active_limit()
        .is_none_or(|limit| active_coupon_count < usize::try_from(limit).unwrap_or(usize::MAX))
}

/// The plan table, cheapest first.
#[must_use]
pub fn catalog() -> &'static [PlanDefinition] {
    &PLANS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_premium_is_free() {
        assert_eq!(resolve("premium", "inactive"), PlanTier::Free.capabilities());
        assert_eq!(resolve("premium", "Active"), PlanTier::Free.capabilities());
    }

    #[test]
    fn unknown_plan_is_free() {
        assert_eq!(resolve("enterprise", "active"), PlanTier::Free.capabilities());
        assert_eq!(resolve("", "active"), PlanTier::Free.capabilities());
    }

    #[test]
    fn unlimited_limit_never_blocks() {
        let premium = PlanTier::Premium.capabilities();
        assert!(allows_another_coupon(&premium, usize::MAX));
    }
}
