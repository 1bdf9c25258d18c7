//! Facade crate for the Encontra engine.
//! Re-exports domain/kernel primitives and composes the feature slices into
//! the per-request flow: host → region → venue → derived facts.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build an [`Engine`] from an [`EngineConfig`](domain::config::EngineConfig) and any
//!   [`VenueStore`](features::venues::VenueStore).
//! - Call [`Engine::view`] per storefront request.
//! - Enable the `surreal` feature and call [`connect_store`] for the database-backed store.

mod engine;

pub use encontra_domain as domain;
pub use encontra_kernel as kernel;
pub use engine::{Engine, RequestContext, VenueView};

/// Feature registry for runtime introspection.
pub mod features {
    pub use encontra_plans as plans;
    pub use encontra_schedule as schedule;
    pub use encontra_tenancy as tenancy;
    pub use encontra_venues as venues;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "tenancy",
        "venues",
        "plans",
        "schedule",
        #[cfg(feature = "surreal")]
        "surreal",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Connects to the configured database and prepares the venue table.
///
/// # Errors
/// Returns [`StoreError::Database`](features::venues::StoreError::Database) if the
/// connection or the schema bootstrap fails.
#[cfg(feature = "surreal")]
pub async fn connect_store(
    config: &domain::config::EngineConfig,
) -> Result<features::venues::SurrealVenueStore, features::venues::StoreError> {
    let db = encontra_database::Database::connect(&config.database).await?;
    features::venues::SurrealVenueStore::bootstrap(db).await
}
