//! `SurrealDB` read side.
//!
//! Each venue is a row of the `venue` table holding the indexed lookup columns
//! and the full document as a JSON string. Reads select the document and parse
//! it with the same serde model as every other store.

use crate::error::StoreError;
use crate::record::VenueRecord;
use crate::store::{VenueQuery, VenueStore};
use encontra_database::{Database, DatabaseErrorExt};
use encontra_kernel::domain::constants::VENUE;
use surrealdb::types::SurrealValue;
use tracing::{debug, info, instrument};

const BOOTSTRAP: &str = "
    DEFINE TABLE IF NOT EXISTS venue SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS slug ON venue TYPE string;
    DEFINE FIELD IF NOT EXISTS region_code ON venue TYPE string;
    DEFINE FIELD IF NOT EXISTS document ON venue TYPE string;
    DEFINE INDEX IF NOT EXISTS venue_slug ON venue FIELDS slug;
    DEFINE INDEX IF NOT EXISTS venue_region_slug ON venue FIELDS region_code, slug UNIQUE;
";

// A slug shared by several regions resolves globally to the lowest region code.
const SELECT_GLOBAL: &str = "SELECT document, region_code FROM venue WHERE slug = $slug \
     ORDER BY region_code ASC LIMIT 1";
const SELECT_SCOPED: &str = "SELECT document, region_code FROM venue \
     WHERE region_code = $region AND slug = $slug LIMIT 1";
const INSERT: &str = "CREATE venue SET slug = $slug, region_code = $region, document = $document";

#[derive(Debug, SurrealValue)]
struct VenueRow {
    document: String,
    region_code: String,
}

/// Venue store over an established [`Database`] session.
#[derive(Debug, Clone)]
pub struct SurrealVenueStore {
    db: Database,
}

impl SurrealVenueStore {
    /// Defines the `venue` table and its indexes, then wraps the session.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the schema statements fail.
    #[instrument(skip_all, fields(ns = db.namespace(), db = db.database()))]
    pub async fn bootstrap(db: Database) -> Result<Self, StoreError> {
        db.execute(BOOTSTRAP).await?;
        info!(table = VENUE, "Venue table ready");
        Ok(Self { db })
    }

    /// Inserts one document. A slug is unique within its region only.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the insert is rejected, e.g. for a
    /// duplicate `(region, slug)` pair, and [`StoreError::Malformed`] if the
    /// record does not serialize.
    #[instrument(skip_all, fields(slug = %record.slug, region = %record.region_code))]
    pub async fn seed(&self, record: &VenueRecord) -> Result<(), StoreError> {
        let document = serde_json::to_string(record)?;
        self.db
            .query(INSERT)
            .bind(("slug", record.slug.trim().to_owned()))
            .bind(("region", record.region_code.trim().to_lowercase()))
            .bind(("document", document))
            .await
            .context("Seeding venue")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Venue insert rejected")?;
        debug!("Venue seeded");
        Ok(())
    }
}

impl VenueStore for SurrealVenueStore {
    #[instrument(skip(self))]
    async fn fetch(&self, query: &VenueQuery) -> Result<Option<VenueRecord>, StoreError> {
        let request = match query {
            VenueQuery::Global { slug } => {
                self.db.query(SELECT_GLOBAL).bind(("slug", slug.clone()))
            },
            VenueQuery::Scoped { region, slug } => self
                .db
                .query(SELECT_SCOPED)
                .bind(("region", region.as_str().to_owned()))
                .bind(("slug", slug.clone())),
        };

        let rows = request
            .await
            .context("Reading venue")?
            .take::<Vec<VenueRow>>(0)
            .context("Decoding venue row")?;

        rows.into_iter()
            .next()
            .map(|row| {
                debug!(region = %row.region_code, "Venue row found");
                VenueRecord::from_json(&row.document).map_err(StoreError::from)
            })
            .transpose()
    }
}
