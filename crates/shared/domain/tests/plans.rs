use encontra_domain::plan::{PLANS, PlanTier};
use serde_json::json;

#[test]
fn capability_set_serializes_with_flat_flags() {
    let value = serde_json::to_value(PlanTier::Basic.capabilities()).unwrap();
    assert_eq!(
        value,
        json!({
            "whatsappEnabled": true,
            "socialsEnabled": true,
            "productLimit": 10,
            "verifiedBadge": false,
            "couponsEnabled": true,
            "couponActiveLimit": 3,
            "featuredEligible": false,
            "galleryLimit": 5,
            "analyticsEnabled": false
        })
    );
}

#[test]
fn plan_table_has_exactly_three_tiers() {
    let tiers: Vec<_> = PLANS.iter().map(|p| p.tier).collect();
    assert_eq!(tiers, vec![PlanTier::Free, PlanTier::Basic, PlanTier::Premium]);
    assert!(PLANS.windows(2).all(|w| w[0].monthly_price < w[1].monthly_price));
}
