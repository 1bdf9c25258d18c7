//! `SurrealDB` sessions for the venue store.
//!
//! [`Database::connect`] opens the engine named by the `[database]` section
//! (`mem://` by default, or `ws://`/`http://` for a running server), waits for
//! it to answer health checks, signs in when credentials are configured and
//! selects the namespace and database. The handle is cheap to clone and
//! dereferences to the underlying [`Surreal`] client for queries.
//!
//! ```rust
//! use encontra_database::{Database, DatabaseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::in_memory("encontra", "directory").await?;
//!     db.execute("DEFINE TABLE IF NOT EXISTS venue SCHEMALESS;").await?;
//!     Ok(())
//! }
//! ```

mod error;

pub use error::{DatabaseError, DatabaseErrorExt};

use encontra_domain::config::{DatabaseConfig, DatabaseCredentials};
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{debug, info, instrument, warn};

const HEALTH_ATTEMPTS: u32 = 3;
const FIRST_RETRY_DELAY: Duration = Duration::from_millis(500);

/// An open session on one namespace and database.
#[derive(Debug, Clone)]
pub struct Database {
    client: Surreal<Any>,
    target: Arc<Target>,
}

#[derive(Debug)]
struct Target {
    namespace: String,
    database: String,
}

impl Database {
    /// Opens a session as described by `config`.
    ///
    /// # Errors
    /// * [`DatabaseError::Settings`] if the url, namespace or database is blank.
    /// * [`DatabaseError::Unreachable`] if the engine fails to start or stays unhealthy
    ///   after three checks with doubling delays.
    /// * [`DatabaseError::SignIn`] if the configured credentials are rejected.
    /// * [`DatabaseError::Surreal`] if the namespace or database cannot be selected.
    #[instrument(
        skip_all,
        fields(url = %config.url, ns = %config.namespace, db = %config.database)
    )]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let url = not_blank(&config.url, "url")?;
        let namespace = not_blank(&config.namespace, "namespace")?;
        let database = not_blank(&config.database, "database")?;

        let client = connect(url).await.map_err(|e| DatabaseError::Unreachable {
            message: e.to_string().into(),
            context: Some(url.to_owned().into()),
        })?;
        wait_until_healthy(&client, url).await?;

        if let Some(DatabaseCredentials { username, password }) = &config.credentials {
            client
                .signin(Root { username: username.clone(), password: password.clone() })
                .await
                .map_err(|e| DatabaseError::SignIn {
                    message: e.to_string().into(),
                    context: Some(username.clone().into()),
                })?;
            debug!(%username, "Signed in as root");
        }

        client.use_ns(namespace).use_db(database).await.context("Selecting namespace")?;
        info!("Database session open");

        Ok(Self {
            client,
            target: Arc::new(Target {
                namespace: namespace.to_owned(),
                database: database.to_owned(),
            }),
        })
    }

    /// Opens an unauthenticated `mem://` session, mostly for tests and fixtures.
    ///
    /// # Errors
    /// Same as [`Database::connect`].
    pub async fn in_memory(
        namespace: impl Into<String>,
        database: impl Into<String>,
    ) -> Result<Self, DatabaseError> {
        let config = DatabaseConfig {
            url: "mem://".to_owned(),
            namespace: namespace.into(),
            database: database.into(),
            credentials: None,
        };
        Self::connect(&config).await
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.target.namespace
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.target.database
    }

    /// Runs a SurrealQL script, failing on the first statement that errors.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the request or any statement fails.
    #[instrument(skip_all, fields(ns = self.namespace()))]
    pub async fn execute(&self, script: impl Into<String>) -> Result<(), DatabaseError> {
        self.client
            .query(script.into())
            .await
            .context("Sending script")?
            .check()
            .map_err(surrealdb::Error::from)
            .context("Script statement failed")?;
        Ok(())
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

async fn wait_until_healthy(client: &Surreal<Any>, url: &str) -> Result<(), DatabaseError> {
    let mut delay = FIRST_RETRY_DELAY;
    for attempt in 1..=HEALTH_ATTEMPTS {
        match client.health().await {
            Ok(()) => return Ok(()),
            Err(e) if attempt < HEALTH_ATTEMPTS => {
                warn!(attempt, ?delay, error = %e, "Database not ready");
                tokio::time::sleep(delay).await;
                delay *= 2;
            },
            Err(e) => {
                return Err(DatabaseError::Unreachable {
                    message: format!("unhealthy after {HEALTH_ATTEMPTS} checks: {e}").into(),
                    context: Some(url.to_owned().into()),
                });
            },
        }
    }
    Ok(())
}

fn not_blank<'a>(value: &'a str, setting: &'static str) -> Result<&'a str, DatabaseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DatabaseError::Settings {
            message: format!("{setting} must not be blank").into(),
            context: None,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_settings_name_the_field() {
        let err = not_blank("  ", "namespace").unwrap_err();
        assert_eq!(err.to_string(), "Invalid database settings: namespace must not be blank");
        assert_eq!(not_blank(" mem:// ", "url").unwrap(), "mem://");
    }
}
