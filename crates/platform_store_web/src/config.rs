//! Compile-time remote-target configuration.

/// One configured remote bucket behind a Supabase Storage-compatible endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreTarget {
    /// Base endpoint, without a trailing slash (e.g. `https://xyz.supabase.co`).
    pub endpoint: String,
    /// Bucket name within the storage service.
    pub bucket: String,
    /// API key sent as both `apikey` and bearer authorization; empty disables auth headers.
    pub api_key: String,
}

impl StoreTarget {
    /// Builds a target, normalizing a trailing slash off the endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            api_key: api_key.into(),
        }
    }
}

/// The two logical buckets the gallery talks to.
///
/// The probe bucket is checked read-only at startup for a connectivity diagnostic; the working
/// bucket carries all real upload/list/delete traffic. They are configured independently and
/// never reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTargets {
    /// Startup connectivity-probe bucket.
    pub probe: StoreTarget,
    /// Bucket used for all upload/list/delete traffic.
    pub working: StoreTarget,
}

const DEFAULT_ENDPOINT: &str = "http://localhost:54321";
const DEFAULT_PROBE_BUCKET: &str = "clientbucket";
const DEFAULT_WORKING_BUCKET: &str = "example";

impl RemoteTargets {
    /// Builds both targets from compile-time environment, falling back to local-dev defaults.
    ///
    /// Recognized variables: `ASSET_STORE_ENDPOINT`, `ASSET_STORE_API_KEY`,
    /// `ASSET_STORE_BUCKET` (working), `ASSET_STORE_PROBE_BUCKET`.
    pub fn from_env() -> Self {
        let endpoint = option_env!("ASSET_STORE_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT);
        let api_key = option_env!("ASSET_STORE_API_KEY").unwrap_or("");
        let working_bucket = option_env!("ASSET_STORE_BUCKET").unwrap_or(DEFAULT_WORKING_BUCKET);
        let probe_bucket =
            option_env!("ASSET_STORE_PROBE_BUCKET").unwrap_or(DEFAULT_PROBE_BUCKET);

        Self {
            probe: StoreTarget::new(endpoint, probe_bucket, api_key),
            working: StoreTarget::new(endpoint, working_bucket, api_key),
        }
    }
}
