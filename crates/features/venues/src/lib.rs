//! Venues feature slice.
//!
//! Resolves a venue for `(region, slug)` with exactly one store read and maps
//! the raw store document into validated domain types at this boundary.
//!
//! Lookup policy:
//! * no region → global lookup by slug alone
//! * region → scoped lookup; a miss is final and never retried globally
//! * store failures stay distinct from misses

mod error;
mod lookup;
mod memory;
mod record;
mod store;
#[cfg(feature = "surreal")]
mod surreal;

pub use error::{StoreError, StoreErrorExt};
pub use lookup::{LookupError, LookupErrorExt, VenueLookupCoordinator};
pub use memory::MemoryVenueStore;
pub use record::{
    CouponRecord, GalleryRecord, ProductRecord, RecordError, SubscriptionRecord, VenueRecord,
};
pub use store::{VenueQuery, VenueStore};
#[cfg(feature = "surreal")]
pub use surreal::SurrealVenueStore;
