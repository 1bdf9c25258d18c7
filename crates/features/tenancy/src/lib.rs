//! Tenancy feature slice: which regional tenant does a request belong to?
//!
//! The tenant is the first label of the `Host` header (`tdf.encontra.com.ar`
//! → `tdf`). Hosts without a usable first label resolve to no region, which
//! callers treat as the global scope. Resolution never fails.

use encontra_kernel::domain::config::TenancyConfig;
use encontra_kernel::domain::region::RegionCode;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug)]
struct Rules {
    apex_label: String,
    reserved_labels: Vec<String>,
    dev_markers: Vec<String>,
    require_known_region: bool,
}

impl Rules {
    fn is_dev_marker(&self, label: &str) -> bool {
        self.dev_markers.iter().any(|m| m == label)
    }

    fn is_reserved(&self, label: &str) -> bool {
        label == self.apex_label
            || self.reserved_labels.iter().any(|r| r == label)
            || self.is_dev_marker(label)
    }
}

/// Derives a [`RegionCode`] from a request host.
///
/// Cheap to clone; the rules are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    rules: Arc<Rules>,
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(&TenancyConfig::default())
    }
}

impl RegionResolver {
    #[must_use]
    pub fn new(config: &TenancyConfig) -> Self {
        let lower = |labels: &[String]| -> Vec<String> {
            labels.iter().map(|l| l.trim().to_lowercase()).collect()
        };
        Self {
            rules: Arc::new(Rules {
                apex_label: config.apex_label.trim().to_lowercase(),
                reserved_labels: lower(&config.reserved_labels),
                dev_markers: lower(&config.dev_markers),
                require_known_region: config.require_known_region,
            }),
        }
    }

    /// Resolves the region of `host`, or `None` for the global scope.
    ///
    /// * fewer than two labels, IP literals and blank first labels → `None`
    /// * a dev marker after the first label (`tdf.localhost:3000`) accepts the
    ///   first label unconditionally
    /// * otherwise `www`, the apex label and bare dev markers are rejected
    #[must_use]
    pub fn resolve(&self, host: &str) -> Option<RegionCode> {
        let host = normalize_host(host)?;
        let mut labels = host.split('.');
        let candidate = labels.next().filter(|l| !l.is_empty())?;
        let rest: Vec<&str> = labels.collect();
        if rest.is_empty() {
            trace!(%host, "Single-label host, no region");
            return None;
        }

        let dev_host = rest.iter().any(|l| self.rules.is_dev_marker(l));
        if !dev_host && self.rules.is_reserved(candidate) {
            trace!(%host, candidate, "Reserved first label, no region");
            return None;
        }

        let code = RegionCode::new(candidate)?;
        if self.rules.require_known_region && code.region().is_none() {
            trace!(%host, %code, "Unregistered region rejected");
            return None;
        }

        trace!(%host, %code, dev_host, "Region resolved");
        Some(code)
    }
}

/// Lowercases, drops a trailing dot and a `:port` suffix. IP literals yield `None`.
fn normalize_host(raw: &str) -> Option<String> {
    let host = raw.trim().to_lowercase();
    if host.is_empty() || host.starts_with('[') || host.parse::<IpAddr>().is_ok() {
        return None;
    }

    let host = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        Some(_) => return None,
        None => host.as_str(),
    };
    let host = host.strip_suffix('.').unwrap_or(host);

    if host.parse::<IpAddr>().is_ok() {
        return None;
    }
    Some(host.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_port_and_trailing_dot() {
        let host = normalize_host(" TDF.Encontra.com.ar. ");
        assert_eq!(host.as_deref(), Some("tdf.encontra.com.ar"));
        assert_eq!(normalize_host("tdf.localhost:3000").as_deref(), Some("tdf.localhost"));
        assert_eq!(normalize_host("127.0.0.1:3000"), None);
        assert_eq!(normalize_host("[::1]:3000"), None);
        assert_eq!(normalize_host("::1"), None);
        assert_eq!(normalize_host("host:abc"), None);
        assert_eq!(normalize_host(""), None);
    }
}
