//! Thin client layer over a LocalStack AWS emulator.
//!
//! The crate wraps the AWS SDK for Rust with a small factory and three
//! service wrappers (S3, SQS, Lambda), all bound to a single local
//! endpoint with placeholder credentials. Every wrapper operation is a
//! one-to-one pass-through to the corresponding SDK call; emulator
//! failures surface to the caller unchanged. There is no caching,
//! pooling, retry, or backoff in this layer.
//!
//! # Example
//!
//! ```no_run
//! use localstack_client::{ClientFactory, LocalStackConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     localstack_client::setup_logging();
//!
//!     let factory = ClientFactory::new(LocalStackConfig::default()).await;
//!
//!     let s3 = factory.s3();
//!     s3.create_bucket("test-bucket").await?;
//!     assert!(s3.list_buckets().await?.contains(&"test-bucket".to_string()));
//!
//!     let sqs = factory.sqs();
//!     let queue_url = sqs.create_queue("demo-queue").await?;
//!     sqs.send_message(&queue_url, "Hello, LocalStack!").await?;
//!     if let Some(message) = sqs.receive_message(&queue_url).await? {
//!         sqs.delete_message(&queue_url, &message.receipt_handle).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod factory;
pub mod health;
pub mod services;

pub use config::LocalStackConfig;
pub use errors::{LocalStackError, LocalStackResult};
pub use factory::{ClientFactory, Service, ServiceHandle};
pub use health::{LocalStackHealth, ServiceStatus};
pub use services::{LambdaService, ReceivedMessage, S3Service, SqsService};

/// Configure human-readable structured logging for binaries and tests.
///
/// Installs a tracing-subscriber fmt layer; call it once at process start.
/// Repeated calls would panic on double initialization, so libraries
/// should leave this to the binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
