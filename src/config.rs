//! Gateway Configuration
//!
//! Endpoint settings for the hosted backend. A CSR bundle has no runtime
//! environment, so overrides are baked in at compile time via `DINEFINDER_*`
//! build-environment variables.

const DEFAULT_URL: &str = "https://spblrvdnzybwqwltkwqd.supabase.co";
const DEFAULT_BUCKET: &str = "restaurants";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the hosted backend project.
    pub url: String,
    /// Public anonymous API key, sent with every request.
    pub anon_key: String,
    /// Storage bucket holding restaurant images.
    pub bucket: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            url: option_env!("DINEFINDER_BACKEND_URL")
                .unwrap_or(DEFAULT_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("DINEFINDER_ANON_KEY").unwrap_or("").to_string(),
            bucket: option_env!("DINEFINDER_IMAGE_BUCKET")
                .unwrap_or(DEFAULT_BUCKET)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        let config = GatewayConfig::from_env();
        assert!(!config.url.ends_with('/'));
        assert!(!config.bucket.is_empty());
    }
}
