use aws_sdk_sqs::error::SdkError;
use aws_sdk_sqs::operation::delete_message::DeleteMessageError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use thiserror::Error;

/// Error types for a single polling cycle of the consumer.
///
/// Any of these aborts the current cycle. The consumer logs it, pauses and
/// polls again; none of them stops the loop.
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// The receive call failed (network error, throttling, malformed response).
    #[error("unable to receive messages: {0}")]
    Receive(#[from] SdkError<ReceiveMessageError>),

    /// The delete call for a printed message failed.
    ///
    /// The message becomes visible again once its visibility timeout expires.
    #[error("unable to delete message: {0}")]
    Delete(#[from] SdkError<DeleteMessageError>),

    /// Writing the rendered message to the output failed.
    #[error("unable to write message output: {0}")]
    Output(#[from] std::io::Error),
}
