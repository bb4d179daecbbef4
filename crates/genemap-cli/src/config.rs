//! Service configuration for the mapping clients
//!
//! Base URLs, contact string, and request timeout are explicit values passed
//! into client constructors; resolution from environment variables happens
//! once, here.

use genemap_common::{GenemapError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Service Configuration Constants
// ============================================================================

/// Default MouseMine web service base URL.
pub const DEFAULT_MOUSEMINE_URL: &str = "http://www.mousemine.org/mousemine/service";

/// Default UniProt ID-mapping endpoint.
pub const DEFAULT_UNIPROT_URL: &str = "http://www.uniprot.org/uploadlists/";

/// Default timeout for service requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for the remote mapping services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// MouseMine web service base URL
    pub mousemine_url: String,

    /// UniProt ID-mapping endpoint URL
    pub uniprot_url: String,

    /// Contact address sent in the User-Agent header, so service operators
    /// can reach out in case of problems
    pub contact: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Create a config with default endpoints
    pub fn new() -> Self {
        Self {
            mousemine_url: DEFAULT_MOUSEMINE_URL.to_string(),
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            contact: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `GENEMAP_MOUSEMINE_URL`: MouseMine service base URL
    /// - `GENEMAP_UNIPROT_URL`: UniProt mapping endpoint URL
    /// - `GENEMAP_CONTACT`: contact address for the User-Agent header
    /// - `GENEMAP_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("GENEMAP_MOUSEMINE_URL") {
            config.mousemine_url = url;
        }

        if let Ok(url) = std::env::var("GENEMAP_UNIPROT_URL") {
            config.uniprot_url = url;
        }

        if let Ok(contact) = std::env::var("GENEMAP_CONTACT") {
            config.contact = contact;
        }

        if let Ok(secs) = std::env::var("GENEMAP_TIMEOUT_SECS") {
            config.timeout_secs = secs
                .parse()
                .map_err(|_| GenemapError::config(format!("invalid timeout: {}", secs)))?;
        }

        Ok(config)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServiceConfig::new();
        assert_eq!(config.mousemine_url, DEFAULT_MOUSEMINE_URL);
        assert_eq!(config.uniprot_url, DEFAULT_UNIPROT_URL);
        assert!(config.contact.is_empty());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    // Env vars are process-wide; all from_env assertions stay in one test.
    #[test]
    fn test_config_from_env() {
        std::env::set_var("GENEMAP_MOUSEMINE_URL", "http://mine.example.com/service");
        std::env::set_var("GENEMAP_CONTACT", "curator@example.com");

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.mousemine_url, "http://mine.example.com/service");
        assert_eq!(config.contact, "curator@example.com");
        assert_eq!(config.uniprot_url, DEFAULT_UNIPROT_URL);

        std::env::remove_var("GENEMAP_MOUSEMINE_URL");
        std::env::remove_var("GENEMAP_CONTACT");

        std::env::set_var("GENEMAP_TIMEOUT_SECS", "soon");
        let result = ServiceConfig::from_env();
        std::env::remove_var("GENEMAP_TIMEOUT_SECS");
        assert!(result.is_err());
    }
}
