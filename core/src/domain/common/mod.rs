pub mod entities;

#[derive(Clone, Debug)]
pub struct AcornConfig {
    pub backend: BackendConfig,
}

/// Connection settings for the Supabase REST backend.
#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
}
