//! Regional tenants.
//!
//! Every storefront request is scoped to one of the Argentine provinces (or to
//! no region at all). The registry is a compiled-in table; it is never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tenant code in canonical lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Normalizes `raw` (trim + lowercase). Returns `None` for blank input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if code.is_empty() { None } else { Some(Self(code.to_lowercase())) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Looks the code up in the [`REGIONS`] registry.
    #[must_use]
    pub fn region(&self) -> Option<&'static Region> {
        Region::find(&self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub code: &'static str,
    pub display_name: &'static str,
}

impl Region {
    const fn new(code: &'static str, display_name: &'static str) -> Self {
        Self { code, display_name }
    }

    /// Case-insensitive lookup by code.
    #[must_use]
    pub fn find(code: &str) -> Option<&'static Self> {
        let code = code.trim();
        REGIONS.iter().find(|r| r.code.eq_ignore_ascii_case(code))
    }
}

/// The 23 provinces plus the autonomous city of Buenos Aires.
pub static REGIONS: [Region; 24] = [
    Region::new("caba", "Ciudad Autónoma de Buenos Aires"),
    Region::new("ba", "Buenos Aires"),
    Region::new("cat", "Catamarca"),
    Region::new("cha", "Chaco"),
    Region::new("chu", "Chubut"),
    Region::new("cba", "Córdoba"),
    Region::new("cor", "Corrientes"),
    Region::new("er", "Entre Ríos"),
    Region::new("for", "Formosa"),
    Region::new("juj", "Jujuy"),
    Region::new("lp", "La Pampa"),
    Region::new("lr", "La Rioja"),
    Region::new("mza", "Mendoza"),
    Region::new("mis", "Misiones"),
    Region::new("nqn", "Neuquén"),
    Region::new("rn", "Río Negro"),
    Region::new("sal", "Salta"),
    Region::new("sj", "San Juan"),
    Region::new("sl", "San Luis"),
    Region::new("sc", "Santa Cruz"),
    Region::new("sf", "Santa Fe"),
    Region::new("sde", "Santiago del Estero"),
    Region::new("tdf", "Tierra del Fuego"),
    Region::new("tuc", "Tucumán"),
];
