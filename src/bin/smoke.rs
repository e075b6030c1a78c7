//! End-to-end smoke run against a live LocalStack instance.
//!
//! Expects the emulator to be up (`docker compose up -d`) and the
//! provisioning script to have run. Exercises one round trip per service
//! and exits non-zero on the first failure.

use anyhow::{Context, Result, bail};
use localstack_client::config::provisioned;
use localstack_client::{ClientFactory, LocalStackConfig, LocalStackHealth, Service};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    localstack_client::setup_logging();

    let config = LocalStackConfig::from_env();
    let health = LocalStackHealth::fetch(&config.endpoint_url)
        .await
        .context("LocalStack health endpoint unreachable; is the container running?")?;
    for service in Service::ALL {
        if !health.is_running(service) {
            bail!("required service {service} is not enabled on {}", config.endpoint_url);
        }
    }
    info!("LocalStack is up at {}", config.endpoint_url);

    let factory = ClientFactory::new(config).await;
    let run_id = Uuid::new_v4().to_string();

    // S3: create, upload, read back, list, share.
    let s3 = factory.s3();
    let bucket = format!("smoke-{run_id}");
    s3.create_bucket(&bucket).await?;
    s3.upload_object(&bucket, "hello.txt", b"hello from the smoke run".to_vec(), Some("text/plain"))
        .await?;
    let body = s3.get_object(&bucket, "hello.txt").await?;
    if body != b"hello from the smoke run" {
        bail!("object body changed in transit");
    }
    let buckets = s3.list_buckets().await?;
    if !buckets.contains(&bucket) {
        bail!("bucket {bucket} missing from listing");
    }
    let url = s3
        .presigned_get_url(&bucket, "hello.txt", std::time::Duration::from_secs(3600))
        .await?;
    info!("S3 round trip ok (presigned: {})", url);

    // SQS: create a fresh queue, send, receive, acknowledge.
    let sqs = factory.sqs();
    let queue_url = sqs.create_queue(&format!("smoke-{run_id}")).await?;
    sqs.send_message(&queue_url, "Hello, LocalStack!").await?;
    let message = sqs
        .receive_message(&queue_url)
        .await?
        .context("queue returned no message")?;
    if message.body != "Hello, LocalStack!" {
        bail!("message body changed in transit: {}", message.body);
    }
    sqs.delete_message(&queue_url, &message.receipt_handle).await?;
    info!("SQS round trip ok");

    // Lambda: invoke the provisioned metrics logger.
    let lambda = factory.lambda();
    lambda.wait_until_active(provisioned::METRICS_FUNCTION).await?;
    let response = lambda
        .invoke(
            provisioned::METRICS_FUNCTION,
            &json!({
                "run_id": run_id,
                "agent_name": "SmokeRunner",
                "tokens_consumed": 0,
                "tokens_generated": 0,
                "response_time_ms": 1,
                "confidence_score": 1.0,
            }),
        )
        .await?;
    if response.is_empty() {
        bail!("function returned an empty payload");
    }
    info!("Lambda invoke ok ({} response bytes)", response.len());

    info!("Smoke run passed");
    Ok(())
}
