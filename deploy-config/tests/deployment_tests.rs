use anyhow::Result;
use deploy_config::{current, DeploymentConfig, Scheme, CONFIG, SERVER, USE_HTTPS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::thread;

#[test]
fn test_deployment_scenario_https() -> Result<()> {
    let config = DeploymentConfig::from_json(r#"{"server": "example.com", "useHTTPS": true}"#)?;
    config.validate_hostname()?;
    assert_eq!(config.endpoint().base_url(), "https://example.com");
    Ok(())
}

#[test]
fn test_deployment_scenario_http() -> Result<()> {
    let config = DeploymentConfig::from_json(r#"{"server": "example.com", "useHTTPS": false}"#)?;
    config.validate_hostname()?;
    assert_eq!(config.endpoint().base_url(), "http://example.com");
    Ok(())
}

#[test]
fn test_record_matches_constants() {
    assert_eq!(CONFIG.server(), SERVER);
    assert_eq!(CONFIG.use_https(), USE_HTTPS);
    assert_eq!(CONFIG.scheme(), Scheme::from_https_flag(USE_HTTPS));
}

#[test]
fn test_template_endpoint_is_valid() -> Result<()> {
    let url = DeploymentConfig::template().endpoint().to_url()?;
    assert_eq!(url.as_str(), "http://localhost/");
    Ok(())
}

#[test]
fn test_concurrent_readers_see_same_values() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (current().server().to_string(), current().use_https())))
        .collect();

    for handle in handles {
        let (server, use_https) = handle.join().expect("reader thread panicked");
        assert_eq!(server, SERVER);
        assert_eq!(use_https, USE_HTTPS);
    }
}

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]([a-z0-9-]{0,10}[a-z0-9])?", 1..4).prop_map(|labels| labels.join("."))
}

proptest! {
    #[test]
    fn prop_base_url_is_scheme_plus_host(server in hostname_strategy(), use_https in any::<bool>()) {
        let config = DeploymentConfig::new(server.clone(), use_https);
        prop_assert!(config.validate_hostname().is_ok());

        let base = config.endpoint().base_url();
        let prefix = if use_https { "https://" } else { "http://" };
        prop_assert!(base.starts_with(prefix));
        prop_assert_eq!(&base[prefix.len()..], server.as_str());
    }

    #[test]
    fn prop_prefixed_hostnames_are_rejected(server in hostname_strategy(), use_https in any::<bool>()) {
        let prefixed = format!("{}://{}", Scheme::from_https_flag(use_https), server);
        let config = DeploymentConfig::new(prefixed, use_https);
        prop_assert!(config.validate_hostname().is_err());
    }
}
