//! Command handlers of the `encontra-probe` binary.
//!
//! Handlers return their output as a `String`; only `main` prints.

pub mod args;

use anyhow::{Context, Result};
use encontra::domain::config::EngineConfig;
use encontra::features::plans::catalog;
use encontra::features::schedule::diagnose;
use encontra::features::venues::{MemoryVenueStore, VenueStore};
use encontra::kernel::clock::{Clock, FixedClock};
use encontra::{Engine, RequestContext};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use tracing::info;

/// `region <host>`: the resolved code, or `(global)`.
#[must_use]
pub fn region(config: &EngineConfig, host: &str) -> String {
    let engine = Engine::new(config.clone(), MemoryVenueStore::default());
    let RequestContext { region, .. } = engine.request_context(host);
    region.map_or_else(|| "(global)".to_owned(), |code| code.to_string())
}

/// `plans`: the compiled-in plan table.
///
/// # Errors
/// Fails only if serialization fails.
pub fn plans() -> Result<String> {
    serde_json::to_string_pretty(catalog()).context("Serializing plan table")
}

/// `venue`: the full view for `host`/`slug` as pretty JSON.
///
/// # Errors
/// Fails on unreadable fixtures, a bad `at` timestamp, a missing store, or a
/// failed lookup.
pub async fn venue(
    config: &EngineConfig,
    host: &str,
    slug: &str,
    at: Option<&str>,
    fixtures: Option<&Path>,
) -> Result<String> {
    match fixtures {
        Some(path) => {
            let engine = Engine::new(config.clone(), load_fixtures(path)?);
            render(&engine, host, slug, at).await
        },
        None => venue_from_database(config, host, slug, at).await,
    }
}

#[cfg(feature = "surreal")]
async fn venue_from_database(
    config: &EngineConfig,
    host: &str,
    slug: &str,
    at: Option<&str>,
) -> Result<String> {
    let store = encontra::connect_store(config).await.context("Opening venue database")?;
    render(&Engine::new(config.clone(), store), host, slug, at).await
}

#[cfg(not(feature = "surreal"))]
async fn venue_from_database(
    _config: &EngineConfig,
    _host: &str,
    _slug: &str,
    _at: Option<&str>,
) -> Result<String> {
    anyhow::bail!("No venue store: pass --fixtures or build with the `surreal` feature")
}

async fn render<S: VenueStore>(
    engine: &Engine<S>,
    host: &str,
    slug: &str,
    at: Option<&str>,
) -> Result<String> {
    let now = match at {
        Some(at) => FixedClock::parse(at)?.now(),
        None => engine.clock()?.now(),
    };
    let view = engine
        .view(host, slug, &now)
        .await
        .with_context(|| format!("Looking up '{slug}' for host '{host}'"))?;
    serde_json::to_string_pretty(&view).context("Serializing venue view")
}

/// `lint`: one line per schedule issue, then a summary line.
///
/// # Errors
/// Fails on unreadable or malformed fixtures.
pub fn lint(fixtures: &Path) -> Result<String> {
    let store = load_fixtures(fixtures)?;
    let mut out = String::new();
    let mut total = 0;
    for record in store.records() {
        let Some(schedule) = &record.schedule else { continue };
        for issue in diagnose(schedule) {
            total += 1;
            let _ = writeln!(out, "{}: {issue}", record.slug);
        }
    }
    let _ = write!(out, "{total} issue(s) in {} venue(s)", store.len());
    Ok(out)
}

fn load_fixtures(path: &Path) -> Result<MemoryVenueStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Reading fixtures from {}", path.display()))?;
    let store = MemoryVenueStore::from_json(&json)?;
    info!(path = %path.display(), venues = store.len(), "Fixtures loaded");
    Ok(store)
}
