//! Stored document shape and its validation into domain types.

use encontra_kernel::domain::plan::PlanTier;
use encontra_kernel::domain::region::RegionCode;
use encontra_kernel::domain::schedule::WeeklySchedule;
use encontra_kernel::domain::text::LocalizedText;
use encontra_kernel::domain::venue::{
    Coupon, GalleryImage, Product, Subscription, SubscriptionStatus, Venue, VenueDetails,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::warn;

#[encontra_derive::encontra_error]
pub enum RecordError {
    #[error("Invalid venue record{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RecordError {
    fn invalid(id: &str, message: &'static str) -> Self {
        Self::Invalid { message: message.into(), context: Some(id.to_owned().into()) }
    }
}

/// A venue document as persisted, with its related collections embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub id: String,
    pub slug: String,
    pub region_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<LocalizedText>,
    #[serde(default)]
    pub subscription: SubscriptionRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WeeklySchedule>,
    #[serde(default)]
    pub manual_open: bool,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub coupons: Vec<CouponRecord>,
    #[serde(default)]
    pub gallery: Vec<GalleryRecord>,
}

/// Raw `{ plan, status }` strings. Both default to empty, which resolves to free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionRecord {
    pub plan: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponRecord {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<LocalizedText>,
}

impl VenueRecord {
    /// Parses one stored JSON document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for documents of the wrong shape.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// Validates the record and resolves localized texts for `language`.
    ///
    /// Structural problems (blank slug, blank region, a name without text) reject
    /// the whole record. Broken entries of the related collections are dropped
    /// with a warning, as is an unknown plan name, which degrades to free.
    ///
    /// # Errors
    /// Returns [`RecordError::Invalid`] naming the record id.
    pub fn into_details(self, language: &str) -> Result<VenueDetails, RecordError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(RecordError::invalid("<no id>", "id is blank"));
        }
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err(RecordError::invalid(id, "slug is blank"));
        }
        let region_code = RegionCode::new(&self.region_code)
            .ok_or_else(|| RecordError::invalid(id, "region code is blank"))?;
        let name = self
            .name
            .resolve(language)
            .ok_or_else(|| RecordError::invalid(id, "name has no text"))?
            .to_owned();

        let text =
            |t: Option<&LocalizedText>| t.and_then(|t| t.resolve(language)).map(str::to_owned);

        let venue = Venue {
            id: id.to_owned(),
            slug: slug.to_owned(),
            region_code,
            zone: self.zone.as_deref().map(str::trim).filter(|z| !z.is_empty()).map(str::to_owned),
            name,
            description: text(self.description.as_ref()),
            category: text(self.category.as_ref()),
            subscription: subscription(id, &self.subscription),
            schedule: self.schedule,
            manual_open: self.manual_open,
        };

        let products = self
            .products
            .into_iter()
            .filter_map(|p| {
                let Some(name) = p.name.resolve(language) else {
                    warn!(venue = id, product = %p.id, "Dropping product without a name");
                    return None;
                };
                let price = p.price.filter(|v| v.is_finite() && *v >= 0.0);
                if price.is_none() && p.price.is_some() {
                    warn!(venue = id, product = %p.id, price = ?p.price, "Ignoring invalid price");
                }
                Some(Product { id: p.id, name: name.to_owned(), price })
            })
            .collect();

        let coupons = self
            .coupons
            .into_iter()
            .filter_map(|c| {
                let Some(title) = c.title.resolve(language) else {
                    warn!(venue = id, coupon = %c.id, "Dropping coupon without a title");
                    return None;
                };
                Some(Coupon { id: c.id, title: title.to_owned(), active: c.active })
            })
            .collect();

        let gallery = self
            .gallery
            .into_iter()
            .filter_map(|g| {
                let url = g.url.trim();
                if url.is_empty() {
                    warn!(venue = id, "Dropping gallery image without a url");
                    return None;
                }
                Some(GalleryImage { url: url.to_owned(), caption: text(g.caption.as_ref()) })
            })
            .collect();

        Ok(VenueDetails { venue, products, coupons, gallery })
    }
}

fn subscription(id: &str, raw: &SubscriptionRecord) -> Subscription {
    let plan = PlanTier::parse(&raw.plan).unwrap_or_else(|| {
        if !raw.plan.is_empty() {
            warn!(venue = id, plan = %raw.plan, "Unknown plan, treating as free");
        }
        PlanTier::Free
    });
    Subscription::new(plan, SubscriptionStatus::parse(&raw.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> VenueRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn minimal_document_defaults_to_free() {
        let details = record(json!({
            "id": "venue:1", "slug": "kiosco", "regionCode": "TDF", "name": "Kiosco"
        }))
        .into_details("es")
        .unwrap();

        assert_eq!(details.venue.region_code.as_str(), "tdf");
        assert_eq!(details.venue.subscription.plan, PlanTier::Free);
        assert!(!details.venue.subscription.status.is_active());
        assert!(details.venue.schedule.is_none());
        assert!(!details.venue.manual_open);
    }

    #[test]
    fn blank_fields_reject_the_record() {
        let err = record(json!({ "id": "venue:2", "slug": " ", "regionCode": "tdf", "name": "X" }))
            .into_details("es")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid venue record (venue:2): slug is blank");

        let nameless = json!({
            "id": "venue:3", "slug": "x", "regionCode": "tdf", "name": { "es": "" }
        });
        let err = record(nameless).into_details("es").unwrap_err();
        assert_eq!(err.to_string(), "Invalid venue record (venue:3): name has no text");
    }

    #[test]
    fn unknown_plan_degrades_but_keeps_status() {
        let details = record(json!({
            "id": "venue:4", "slug": "x", "regionCode": "cba", "name": "X",
            "subscription": { "plan": "gold", "status": "active" }
        }))
        .into_details("es")
        .unwrap();
        assert_eq!(
            details.venue.subscription,
            Subscription::new(PlanTier::Free, SubscriptionStatus::Active)
        );
    }
}
