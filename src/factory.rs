use std::fmt;
use std::str::FromStr;

use aws_config::SdkConfig;

use crate::config::LocalStackConfig;
use crate::errors::{LocalStackError, LocalStackResult};
use crate::services::{LambdaService, S3Service, SqsService};

/// The closed set of services this crate can hand out clients for.
///
/// Dispatch is a compile-time-checked enum match; the only place a raw
/// string identifier enters the picture is [`Service::from_str`], which
/// rejects anything outside this set before any network call happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    S3,
    Sqs,
    Lambda,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::S3, Service::Sqs, Service::Lambda];

    /// The wire identifier used by LocalStack's health endpoint and
    /// callers that configure services by name.
    pub fn identifier(self) -> &'static str {
        match self {
            Service::S3 => "s3",
            Service::Sqs => "sqs",
            Service::Lambda => "lambda",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Service {
    type Err = LocalStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s3" => Ok(Service::S3),
            "sqs" => Ok(Service::Sqs),
            "lambda" => Ok(Service::Lambda),
            other => Err(LocalStackError::UnsupportedService(other.to_string())),
        }
    }
}

/// A ready-to-use client for one of the supported services.
#[derive(Debug, Clone)]
pub enum ServiceHandle {
    S3(S3Service),
    Sqs(SqsService),
    Lambda(LambdaService),
}

impl ServiceHandle {
    pub fn service(&self) -> Service {
        match self {
            ServiceHandle::S3(_) => Service::S3,
            ServiceHandle::Sqs(_) => Service::Sqs,
            ServiceHandle::Lambda(_) => Service::Lambda,
        }
    }
}

/// Builds service clients bound to a single LocalStack endpoint.
///
/// The shared SDK configuration is loaded once at construction; handing
/// out clients afterwards is pure in-memory work. The factory itself holds
/// no mutable state and can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    config: LocalStackConfig,
    sdk_config: SdkConfig,
}

impl ClientFactory {
    pub async fn new(config: LocalStackConfig) -> Self {
        let sdk_config = config.load_sdk_config().await;
        Self { config, sdk_config }
    }

    /// Factory bound to the environment-derived configuration.
    pub async fn from_env() -> Self {
        Self::new(LocalStackConfig::from_env()).await
    }

    pub fn config(&self) -> &LocalStackConfig {
        &self.config
    }

    /// The endpoint every handed-out client is bound to.
    pub fn endpoint_url(&self) -> &str {
        &self.config.endpoint_url
    }

    /// Client for a service chosen at compile time.
    pub fn client(&self, service: Service) -> ServiceHandle {
        match service {
            Service::S3 => ServiceHandle::S3(self.s3()),
            Service::Sqs => ServiceHandle::Sqs(self.sqs()),
            Service::Lambda => ServiceHandle::Lambda(self.lambda()),
        }
    }

    /// Client for a service named at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStackError::UnsupportedService`] naming the
    /// identifier when it is not one of `s3`, `sqs`, `lambda`. No network
    /// call is made in that case.
    pub fn client_for(&self, name: &str) -> LocalStackResult<ServiceHandle> {
        Ok(self.client(name.parse()?))
    }

    pub fn s3(&self) -> S3Service {
        let s3_config = aws_sdk_s3::config::Builder::from(&self.sdk_config)
            .force_path_style(self.config.force_path_style)
            .build();
        S3Service::new(aws_sdk_s3::Client::from_conf(s3_config))
    }

    pub fn sqs(&self) -> SqsService {
        SqsService::new(aws_sdk_sqs::Client::new(&self.sdk_config))
    }

    pub fn lambda(&self) -> LambdaService {
        LambdaService::new(aws_sdk_lambda::Client::new(&self.sdk_config))
    }
}
