//! Subscription tiers and the capability sets they grant.

use bitflags::bitflags;
use crate::constants::{PLAN_BASIC, PLAN_FREE, PLAN_PREMIUM};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Boolean capabilities of a tier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapabilityFlags: u32 {
        const WHATSAPP = 1 << 0;
        const SOCIALS = 1 << 1;
        const VERIFIED_BADGE = 1 << 2;
        const COUPONS = 1 << 3;
        const FEATURED = 1 << 4;
        const ANALYTICS = 1 << 5;
    }
}

/// The complete, immutable bundle of flags and limits granted by one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    flags: CapabilityFlags,
    product_limit: u32,
    coupon_active_limit: Option<u32>,
    gallery_limit: u32,
}

impl CapabilitySet {
    const fn new(
        flags: CapabilityFlags,
        product_limit: u32,
        coupon_active_limit: Option<u32>,
        gallery_limit: u32,
    ) -> Self {
        Self { flags, product_limit, coupon_active_limit, gallery_limit }
    }

    #[must_use]
    pub const fn flags(&self) -> CapabilityFlags {
        self.flags
    }

    #[must_use]
    pub const fn whatsapp_enabled(&self) -> bool {
        self.flags.contains(CapabilityFlags::WHATSAPP)
    }

    #[must_use]
    pub const fn socials_enabled(&self) -> bool {
        self.flags.contains(CapabilityFlags::SOCIALS)
    }

    #[must_use]
    pub const fn verified_badge(&self) -> bool {
        self.flags.contains(CapabilityFlags::VERIFIED_BADGE)
    }

    #[must_use]
    pub const fn coupons_enabled(&self) -> bool {
        self.flags.contains(CapabilityFlags::COUPONS)
    }

    #[must_use]
    pub const fn featured_eligible(&self) -> bool {
        self.flags.contains(CapabilityFlags::FEATURED)
    }

    #[must_use]
    pub const fn analytics_enabled(&self) -> bool {
        self.flags.contains(CapabilityFlags::ANALYTICS)
    }

    #[must_use]
    pub const fn product_limit(&self) -> u32 {
        self.product_limit
    }

    /// Maximum simultaneously active coupons; `None` means unlimited.
    #[must_use]
    pub const fn coupon_active_limit(&self) -> Option<u32> {
        self.coupon_active_limit
    }

    #[must_use]
    pub const fn gallery_limit(&self) -> u32 {
        self.gallery_limit
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CapabilitySet", 9)?;
        s.serialize_field("whatsappEnabled", &self.whatsapp_enabled())?;
        s.serialize_field("socialsEnabled", &self.socials_enabled())?;
        s.serialize_field("productLimit", &self.product_limit)?;
        s.serialize_field("verifiedBadge", &self.verified_badge())?;
        s.serialize_field("couponsEnabled", &self.coupons_enabled())?;
        s.serialize_field("couponActiveLimit", &self.coupon_active_limit)?;
        s.serialize_field("featuredEligible", &self.featured_eligible())?;
        s.serialize_field("galleryLimit", &self.gallery_limit)?;
        s.serialize_field("analyticsEnabled", &self.analytics_enabled())?;
        s.end()
    }
}

/// Subscription tier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Basic,
    Premium,
}

impl PlanTier {
    /// Exact match against the stored plan names. Unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            PLAN_FREE => Some(Self::Free),
            PLAN_BASIC => Some(Self::Basic),
            PLAN_PREMIUM => Some(Self::Premium),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => PLAN_FREE,
            Self::Basic => PLAN_BASIC,
            Self::Premium => PLAN_PREMIUM,
        }
    }

    #[must_use]
    pub fn definition(self) -> &'static PlanDefinition {
        match self {
            Self::Free => &PLANS[0],
            Self::Basic => &PLANS[1],
            Self::Premium => &PLANS[2],
        }
    }

    #[must_use]
    pub fn capabilities(self) -> CapabilitySet {
        self.definition().capabilities
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the compiled-in plan table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub tier: PlanTier,
    /// Monthly price in Argentine pesos.
    pub monthly_price: u32,
    pub capabilities: CapabilitySet,
}

const BASIC_FLAGS: CapabilityFlags =
    CapabilityFlags::WHATSAPP.union(CapabilityFlags::SOCIALS).union(CapabilityFlags::COUPONS);

/// Ordered free → basic → premium; [`PlanTier::definition`] indexes into it.
pub static PLANS: [PlanDefinition; 3] = [
    PlanDefinition {
        tier: PlanTier::Free,
        monthly_price: 0,
        capabilities: CapabilitySet::new(CapabilityFlags::empty(), 0, Some(0), 1),
    },
    PlanDefinition {
        tier: PlanTier::Basic,
        monthly_price: 15_000,
        capabilities: CapabilitySet::new(BASIC_FLAGS, 10, Some(3), 5),
    },
    PlanDefinition {
        tier: PlanTier::Premium,
        monthly_price: 30_000,
        capabilities: CapabilitySet::new(CapabilityFlags::all(), 100, None, 20),
    },
];
