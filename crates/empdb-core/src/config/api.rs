//! API behavior configuration.

use serde::{Deserialize, Serialize};

/// Settings that shape repository reads at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// System-wide default page size for unpaginated list reads.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    25
}
