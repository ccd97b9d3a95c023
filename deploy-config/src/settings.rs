//! Per-deployment settings.
//!
//! This file is a template: copy it over for each deployment and fill in
//! the real values before building the frontend.

/// Domain or IP address, without protocol (e.g. `localhost` or `yourdomain.com`)
pub const SERVER_NAME: &str = "localhost";

/// Whether to use HTTPS
pub const USE_HTTPS: bool = false;
