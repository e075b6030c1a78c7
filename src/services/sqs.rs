use aws_sdk_sqs::Client as SqsClient;
use tracing::{debug, info};

use crate::errors::{LocalStackError, LocalStackResult};

/// A message pulled off a queue, paired with the receipt handle needed to
/// delete it.
#[derive(Debug, Clone)]
pub struct ReceivedMessage {
    pub body: String,
    pub receipt_handle: String,
}

/// Queue operations against the emulated SQS endpoint.
#[derive(Debug, Clone)]
pub struct SqsService {
    client: SqsClient,
}

impl SqsService {
    pub fn new(client: SqsClient) -> Self {
        Self { client }
    }

    /// Access the underlying SDK client for operations not wrapped here.
    pub fn client(&self) -> &SqsClient {
        &self.client
    }

    /// Create a queue and return its URL. Creating a queue that already
    /// exists with identical attributes returns the existing URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the emulator rejects the creation.
    pub async fn create_queue(&self, name: &str) -> LocalStackResult<String> {
        let response = self.client.create_queue().queue_name(name).send().await?;
        let queue_url = response
            .queue_url()
            .ok_or_else(|| LocalStackError::Aws("CreateQueue returned no queue URL".to_string()))?
            .to_string();
        info!("Created queue {} at {}", name, queue_url);
        Ok(queue_url)
    }

    /// Resolve the URL of an existing queue by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the queue does not exist.
    pub async fn get_queue_url(&self, name: &str) -> LocalStackResult<String> {
        let response = self.client.get_queue_url().queue_name(name).send().await?;
        response
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| LocalStackError::Aws("GetQueueUrl returned no queue URL".to_string()))
    }

    /// Send a message and return its message ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be sent, e.g. when the queue
    /// does not exist.
    pub async fn send_message(&self, queue_url: &str, body: &str) -> LocalStackResult<String> {
        let response = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await?;
        let message_id = response.message_id().unwrap_or_default().to_string();
        debug!("Sent message {} to {}", message_id, queue_url);
        Ok(message_id)
    }

    /// Receive at most one message. Returns `None` when the queue is empty
    /// within the short poll window.
    ///
    /// # Errors
    ///
    /// Returns an error if the receive call fails.
    pub async fn receive_message(
        &self,
        queue_url: &str,
    ) -> LocalStackResult<Option<ReceivedMessage>> {
        let response = self
            .client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(1)
            .wait_time_seconds(1)
            .send()
            .await?;

        let Some(message) = response.messages().first() else {
            return Ok(None);
        };
        let receipt_handle = message
            .receipt_handle()
            .ok_or_else(|| {
                LocalStackError::Aws("ReceiveMessage returned no receipt handle".to_string())
            })?
            .to_string();
        Ok(Some(ReceivedMessage {
            body: message.body().unwrap_or_default().to_string(),
            receipt_handle,
        }))
    }

    /// Acknowledge a received message so it is not redelivered.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid or expired receipt handle.
    pub async fn delete_message(
        &self,
        queue_url: &str,
        receipt_handle: &str,
    ) -> LocalStackResult<()> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;
        debug!("Deleted message from {}", queue_url);
        Ok(())
    }

    /// Drop all messages currently in the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the purge is rejected.
    pub async fn purge_queue(&self, queue_url: &str) -> LocalStackResult<()> {
        self.client.purge_queue().queue_url(queue_url).send().await?;
        Ok(())
    }
}
