use serde::{Deserialize, Serialize};

/// Settings for the wttr.in client.
///
/// Every field has a default; in practice the only reason to override
/// `base_url` is to point the client at a local test server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WttrConfig {
    /// Upstream base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://wttr.in".to_string()
}

impl Default for WttrConfig {
    fn default() -> Self {
        Self { base_url: default_base_url() }
    }
}
