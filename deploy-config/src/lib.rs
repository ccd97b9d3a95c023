//! Deployment settings for the frontend: the server to talk to and whether
//! to reach it over HTTPS.
//!
//! Edit [`settings`] for each deployment. Everything else reads the values
//! through [`SERVER`] / [`USE_HTTPS`] or the [`CONFIG`] record.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod scheme;
pub mod settings;

// Re-export the settings under their exported names
pub use settings::{SERVER_NAME as SERVER, USE_HTTPS};

// Re-export commonly used items
pub use config::{current, DeploymentConfig, CONFIG};
pub use endpoint::Endpoint;
pub use error::{ConfigError, Result};
pub use scheme::Scheme;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aliases_point_at_settings() {
        assert_eq!(SERVER, settings::SERVER_NAME);
        assert_eq!(USE_HTTPS, settings::USE_HTTPS);
    }

    #[test]
    fn test_unedited_template() {
        assert_eq!(SERVER, "localhost");
        assert!(!USE_HTTPS);
        assert!(CONFIG.is_template());
    }

    #[test]
    fn test_server_has_no_protocol() {
        assert!(!SERVER.is_empty());
        assert!(!SERVER.starts_with("http://"));
        assert!(!SERVER.starts_with("https://"));
        assert!(!SERVER.ends_with('/'));
    }
}
