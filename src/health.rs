use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::errors::LocalStackResult;
use crate::factory::Service;

/// Lifecycle states LocalStack reports per service on its health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Available,
    Running,
    Disabled,
    Error,
    #[serde(other)]
    Unknown,
}

/// The emulator's view of which services are enabled, as served by
/// `GET /_localstack/health`.
///
/// Fetched once at startup by callers that want to fail fast when the
/// emulator is down or a required service is disabled; the library itself
/// never consults it.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalStackHealth {
    pub services: HashMap<String, ServiceStatus>,
    #[serde(default)]
    pub version: Option<String>,
}

impl LocalStackHealth {
    /// Fetch and decode the health record from a LocalStack endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint is unreachable, answers with a
    /// non-success status, or serves a body that does not decode.
    pub async fn fetch(endpoint_url: &str) -> LocalStackResult<Self> {
        let url = format!("{}/_localstack/health", endpoint_url.trim_end_matches('/'));
        let health: LocalStackHealth = reqwest::get(&url)
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("LocalStack reports {} services", health.services.len());
        Ok(health)
    }

    /// Whether a service is enabled and answering. LocalStack reports
    /// `available` for services that are enabled but not yet started
    /// (they start lazily on first request), so both states count.
    pub fn is_running(&self, service: Service) -> bool {
        matches!(
            self.services.get(service.identifier()),
            Some(ServiceStatus::Available | ServiceStatus::Running)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_health_payload() {
        let body = r#"{
            "services": {"s3": "running", "sqs": "available", "kms": "disabled"},
            "version": "3.4.0"
        }"#;
        let health: LocalStackHealth = serde_json::from_str(body).unwrap();
        assert!(health.is_running(Service::S3));
        assert!(health.is_running(Service::Sqs));
        assert!(!health.is_running(Service::Lambda));
        assert_eq!(health.version.as_deref(), Some("3.4.0"));
    }

    #[test]
    fn unknown_statuses_do_not_fail_decoding() {
        let body = r#"{"services": {"lambda": "initializing"}}"#;
        let health: LocalStackHealth = serde_json::from_str(body).unwrap();
        assert_eq!(
            health.services.get("lambda"),
            Some(&ServiceStatus::Unknown)
        );
        assert!(!health.is_running(Service::Lambda));
    }
}
