//! Lambda tests against a running LocalStack. These additionally expect
//! `scripts/setup-localstack.sh` to have run, which deploys the
//! AgentMetricsLogger function and leaves its deployment package under
//! `scripts/build/`. Run with `cargo test -- --ignored`.

use localstack_client::config::provisioned;
use localstack_client::{ClientFactory, LocalStackError};
use serde_json::json;
use uuid::Uuid;

fn metrics_event(run_id: &str) -> serde_json::Value {
    json!({
        "run_id": run_id,
        "agent_name": "IntegrationTest",
        "tokens_consumed": 10,
        "tokens_generated": 5,
        "response_time_ms": 42,
        "confidence_score": 0.9,
    })
}

#[tokio::test]
#[ignore] // Requires LocalStack plus the provisioning script
async fn test_provisioned_function_is_invocable() {
    let lambda = ClientFactory::from_env().await.lambda();

    lambda
        .wait_until_active(provisioned::METRICS_FUNCTION)
        .await
        .unwrap();

    let payload = lambda
        .invoke(
            provisioned::METRICS_FUNCTION,
            &metrics_event(&Uuid::new_v4().to_string()),
        )
        .await
        .unwrap();

    // A successful invoke returns a defined JSON body, not an empty payload
    assert!(!payload.is_empty());
    let response: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(response["statusCode"], 200);
}

#[tokio::test]
#[ignore] // Requires LocalStack plus the provisioning script
async fn test_created_function_can_be_invoked() {
    let lambda = ClientFactory::from_env().await.lambda();
    let name = format!("metrics-copy-{}", Uuid::new_v4());

    let zip_path = concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/build/metrics_logger.zip");
    let zip_bytes = std::fs::read(zip_path)
        .expect("run scripts/setup-localstack.sh first to build the deployment package");

    lambda
        .create_function(
            &name,
            "metrics_logger.lambda_handler",
            "python3.11",
            "arn:aws:iam::000000000000:role/lambda-exec",
            zip_bytes,
        )
        .await
        .unwrap();
    lambda.wait_until_active(&name).await.unwrap();
    lambda
        .add_invoke_permission(&name, "allow-external-invoke", "*")
        .await
        .unwrap();

    let payload = lambda
        .invoke(&name, &metrics_event(&Uuid::new_v4().to_string()))
        .await
        .unwrap();
    assert!(!payload.is_empty());
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_invoking_missing_function_surfaces_the_emulator_error() {
    let lambda = ClientFactory::from_env().await.lambda();

    let error = lambda
        .invoke(
            &format!("absent-{}", Uuid::new_v4()),
            &json!({"ping": true}),
        )
        .await
        .unwrap_err();
    assert!(matches!(error, LocalStackError::Aws(_)), "got: {error}");
}
