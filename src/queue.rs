use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_sdk_sqs::types::{Message, MessageSystemAttributeName};

use crate::config::ReceiveSettings;
use crate::errors::ConsumerError;

/// A message as handed to the consumer for one processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Message body, empty when the service returned none.
    pub body: String,

    /// Token needed to delete this delivery of the message.
    pub receipt_handle: Option<String>,

    pub message_id: Option<String>,

    /// System attributes such as `SentTimestamp` or `ApproximateReceiveCount`.
    pub attributes: BTreeMap<String, String>,

    /// Names of the custom message attributes that came with the message.
    pub message_attribute_names: Vec<String>,
}

impl ReceivedMessage {
    /// Creates a message with the given body and receipt handle.
    pub fn new(body: impl Into<String>, receipt_handle: Option<&str>) -> Self {
        ReceivedMessage {
            body: body.into(),
            receipt_handle: receipt_handle.map(str::to_string),
            ..Default::default()
        }
    }

    /// The message id, or `"unknown"` for logging when absent.
    pub fn id_or_unknown(&self) -> &str {
        self.message_id.as_deref().unwrap_or("unknown")
    }
}

impl From<&Message> for ReceivedMessage {
    fn from(message: &Message) -> Self {
        let attributes = message
            .attributes()
            .map(|attributes| {
                attributes
                    .iter()
                    .map(|(name, value)| (name.as_str().to_string(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let mut message_attribute_names: Vec<String> = message
            .message_attributes()
            .map(|attributes| attributes.keys().cloned().collect())
            .unwrap_or_default();
        message_attribute_names.sort();

        ReceivedMessage {
            body: message.body().unwrap_or_default().to_string(),
            receipt_handle: message.receipt_handle().map(str::to_string),
            message_id: message.message_id().map(str::to_string),
            attributes,
            message_attribute_names,
        }
    }
}

/// The two queue operations the consumer relies on.
///
/// Implemented for [`aws_sdk_sqs::Client`]; tests drive the consumer with an
/// in-memory implementation.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Receives up to `settings.max_number_of_messages` messages from `queue_url`,
    /// long-polling for at most `settings.wait_time_seconds`.
    async fn receive(
        &self,
        queue_url: &str,
        settings: &ReceiveSettings,
    ) -> Result<Vec<ReceivedMessage>, ConsumerError>;

    /// Deletes the delivery identified by `receipt_handle` from `queue_url`.
    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), ConsumerError>;
}

#[async_trait]
impl MessageQueue for aws_sdk_sqs::Client {
    async fn receive(
        &self,
        queue_url: &str,
        settings: &ReceiveSettings,
    ) -> Result<Vec<ReceivedMessage>, ConsumerError> {
        let output = self
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(settings.max_number_of_messages)
            .wait_time_seconds(settings.wait_time_seconds)
            .visibility_timeout(settings.visibility_timeout_seconds)
            .message_system_attribute_names(MessageSystemAttributeName::All)
            .message_attribute_names("All")
            .send()
            .await?;

        Ok(output.messages().iter().map(ReceivedMessage::from).collect())
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), ConsumerError> {
        self.delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        Ok(())
    }
}
