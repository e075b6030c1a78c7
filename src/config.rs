use std::env;

use aws_config::{Region, SdkConfig};
use aws_credential_types::Credentials;

/// Default edge endpoint exposed by the LocalStack container.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4566";

/// Default region for local testing.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Placeholder credentials accepted (but never validated) by LocalStack.
pub const DEFAULT_ACCESS_KEY: &str = "test";
pub const DEFAULT_SECRET_KEY: &str = "test";

/// Names of the resources the provisioning script creates ahead of time.
/// Callers that rely on pre-existing infrastructure (the smoke binary, the
/// integration tests) address resources through these constants, so the
/// script and the library cannot drift apart silently.
pub mod provisioned {
    /// DynamoDB table keyed by `doc_id`.
    pub const DOCUMENTS_TABLE: &str = "DocumentsMetadata";
    /// DynamoDB table keyed by `run_id` + `timestamp`.
    pub const METRICS_TABLE: &str = "AgentMetrics";
    /// Versioned bucket holding uploaded documents.
    pub const DOCUMENTS_BUCKET: &str = "my-pdf-storage";
    /// Metrics-logging function, invocable by external callers.
    pub const METRICS_FUNCTION: &str = "AgentMetricsLogger";
}

/// Connection settings for a LocalStack instance.
///
/// Constructed once and passed to [`crate::ClientFactory`]; never mutated
/// afterwards. Everything defaults to the stock local setup (edge port
/// 4566, dummy credentials, path-style S3 addressing), so most callers can
/// use [`LocalStackConfig::default`] or [`LocalStackConfig::from_env`]
/// as-is.
#[derive(Debug, Clone)]
pub struct LocalStackConfig {
    pub endpoint_url: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Address buckets as `/bucket/key` rather than `bucket.host/key`.
    /// LocalStack resolves virtual-host style inconsistently, so this
    /// stays on for storage operations.
    pub force_path_style: bool,
}

impl Default for LocalStackConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            access_key_id: DEFAULT_ACCESS_KEY.to_string(),
            secret_access_key: DEFAULT_SECRET_KEY.to_string(),
            force_path_style: true,
        }
    }
}

impl LocalStackConfig {
    /// Build a configuration from the environment, falling back to the
    /// stock local defaults for anything unset.
    ///
    /// Recognized variables: `LOCALSTACK_ENDPOINT`, `AWS_REGION`,
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint_url: env::var("LOCALSTACK_ENDPOINT").unwrap_or(defaults.endpoint_url),
            region: env::var("AWS_REGION").unwrap_or(defaults.region),
            access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or(defaults.access_key_id),
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                .unwrap_or(defaults.secret_access_key),
            force_path_style: true,
        }
    }

    /// Load the shared SDK configuration for this endpoint.
    ///
    /// The explicit credentials provider and region keep the SDK from
    /// consulting the ambient credential chain, so construction never
    /// performs network I/O.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        aws_config::defaults(aws_config::BehaviorVersion::latest())
            .endpoint_url(self.endpoint_url.clone())
            .region(Region::new(self.region.clone()))
            .credentials_provider(Credentials::new(
                self.access_key_id.clone(),
                self.secret_access_key.clone(),
                None,
                None,
                "localstack-static",
            ))
            .load()
            .await
    }
}
