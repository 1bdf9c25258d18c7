use encontra_kernel::domain::config::TenancyConfig;
use encontra_tenancy::RegionResolver;
use proptest::prelude::*;

fn resolve(host: &str) -> Option<String> {
    RegionResolver::default().resolve(host).map(|c| c.as_str().to_owned())
}

#[test]
fn subdomain_is_the_region() {
    assert_eq!(resolve("tdf.encontra.com.ar").as_deref(), Some("tdf"));
    assert_eq!(resolve("MZA.encontra.com.ar").as_deref(), Some("mza"));
}

#[test]
fn apex_and_www_have_no_region() {
    assert_eq!(resolve("www.encontra.com.ar"), None);
    assert_eq!(resolve("encontra.com.ar"), None);
}

#[test]
fn local_development_hosts() {
    assert_eq!(resolve("tdf.localhost:3000").as_deref(), Some("tdf"));
    assert_eq!(resolve("localhost:3000"), None);
    assert_eq!(resolve("localhost"), None);
    // A dev marker later in the host accepts even reserved first labels.
    assert_eq!(resolve("www.localhost:3000").as_deref(), Some("www"));
    // A bare dev marker as the first label of a real domain is not a region.
    assert_eq!(resolve("localhost.encontra.com.ar"), None);
}

#[test]
fn malformed_hosts_have_no_region() {
    let hosts = ["", "   ", ".encontra.com.ar", "127.0.0.1", "127.0.0.1:8080", "[::1]:3000", "tdf"];
    for host in hosts {
        assert_eq!(resolve(host), None, "{host:?}");
    }
}

#[test]
fn configured_apex_label_is_reserved() {
    let config = TenancyConfig { apex_label: "guia".to_owned(), ..TenancyConfig::default() };
    let resolver = RegionResolver::new(&config);
    assert!(resolver.resolve("guia.com.ar").is_none());
    let apex = resolver.resolve("encontra.com.ar").map(|c| c.to_string());
    assert_eq!(apex.as_deref(), Some("encontra"));
}

#[test]
fn strict_mode_requires_registered_region() {
    let config = TenancyConfig { require_known_region: true, ..TenancyConfig::default() };
    let resolver = RegionResolver::new(&config);
    let known = resolver.resolve("tdf.encontra.com.ar").map(|c| c.to_string());
    assert_eq!(known.as_deref(), Some("tdf"));
    assert!(resolver.resolve("atlantis.encontra.com.ar").is_none());
    assert!(RegionResolver::default().resolve("atlantis.encontra.com.ar").is_some());
}

proptest! {
    #[test]
    fn resolution_is_total_and_idempotent(host in "\\PC{0,40}") {
        let resolver = RegionResolver::default();
        let first = resolver.resolve(&host);
        prop_assert_eq!(first.clone(), resolver.resolve(&host));
        if let Some(code) = first {
            prop_assert_eq!(code.as_str(), code.as_str().to_lowercase());
            prop_assert!(!code.as_str().is_empty());
        }
    }

    #[test]
    fn any_lowercase_label_under_apex_resolves(label in "[a-z]{1,8}") {
        prop_assume!(label != "www" && label != "encontra" && label != "localhost");
        let host = format!("{label}.encontra.com.ar");
        prop_assert_eq!(resolve(&host), Some(label));
    }
}
