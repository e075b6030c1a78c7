//! SQS round trips against a running LocalStack (`docker compose up -d`).
//! Run with `cargo test -- --ignored`.

use localstack_client::{ClientFactory, LocalStackError};
use uuid::Uuid;

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_sent_message_is_received_then_gone_after_delete() {
    let sqs = ClientFactory::from_env().await.sqs();
    let queue_url = sqs.create_queue(&unique("roundtrip")).await.unwrap();

    let message_id = sqs
        .send_message(&queue_url, "Hello, LocalStack!")
        .await
        .unwrap();
    assert!(!message_id.is_empty());

    let message = sqs
        .receive_message(&queue_url)
        .await
        .unwrap()
        .expect("queue should hold the message we just sent");
    assert_eq!(message.body, "Hello, LocalStack!");

    sqs.delete_message(&queue_url, &message.receipt_handle)
        .await
        .unwrap();

    // The queue held exactly one message, so a second receive after the
    // delete comes back empty
    assert!(sqs.receive_message(&queue_url).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_queue_url_can_be_resolved_by_name() {
    let sqs = ClientFactory::from_env().await.sqs();
    let name = unique("named");

    let created_url = sqs.create_queue(&name).await.unwrap();
    let resolved_url = sqs.get_queue_url(&name).await.unwrap();
    assert_eq!(created_url, resolved_url);
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_receive_from_empty_queue_returns_none() {
    let sqs = ClientFactory::from_env().await.sqs();
    let queue_url = sqs.create_queue(&unique("empty")).await.unwrap();

    assert!(sqs.receive_message(&queue_url).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_purge_drops_pending_messages() {
    let sqs = ClientFactory::from_env().await.sqs();
    let queue_url = sqs.create_queue(&unique("purged")).await.unwrap();

    sqs.send_message(&queue_url, "first").await.unwrap();
    sqs.send_message(&queue_url, "second").await.unwrap();
    sqs.purge_queue(&queue_url).await.unwrap();

    assert!(sqs.receive_message(&queue_url).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires a running LocalStack instance
async fn test_sending_to_missing_queue_surfaces_the_emulator_error() {
    let sqs = ClientFactory::from_env().await.sqs();

    let error = sqs
        .send_message(
            "http://localhost:4566/000000000000/does-not-exist",
            "lost",
        )
        .await
        .unwrap_err();
    assert!(matches!(error, LocalStackError::Aws(_)), "got: {error}");
}
