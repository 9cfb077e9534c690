//! Backend Config

use std::fmt;

use clap::Args;

/// Catalog backend settings.
#[derive(Clone, Args)]
pub struct BackendConfig {
    /// Backend project URL, e.g. `https://xyz.supabase.co`
    #[arg(long = "backend-url", env = "SUPABASE_URL")]
    pub url: String,

    /// Anonymous API key
    #[arg(long = "backend-key", env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub anon_key: String,
}

impl BackendConfig {
    /// Create backend settings from a project URL and anonymous key.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// REST endpoint for a table or RPC path, e.g. `products` or `rpc/insert_product`.
    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.url.trim_end_matches('/'))
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
