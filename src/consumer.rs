use std::future::Future;
use std::io::Write;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::config::{ConsumerConfig, ReceiveSettings};
use crate::errors::ConsumerError;
use crate::format::render_body;
use crate::queue::{MessageQueue, ReceivedMessage};

/// Result of processing a single message that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The body was printed and the message deleted from the queue.
    Deleted,

    /// The body was printed but the message carried no receipt handle, so it
    /// could not be deleted. It reappears after its visibility timeout.
    MissingReceiptHandle,
}

enum Step {
    Shutdown,
    Cycle(Result<usize, ConsumerError>),
}

/// Long-polls one queue, prints every message and deletes it afterwards.
///
/// The consumer owns its queue handle and its output. Messages are handled
/// one at a time, in the order the queue returned them.
pub struct Consumer<Q, W> {
    queue: Q,
    queue_url: String,
    settings: ReceiveSettings,
    error_pause: Duration,
    output: W,
}

impl<Q, W> Consumer<Q, W>
where
    Q: MessageQueue,
    W: Write,
{
    /// Creates a consumer for `config.queue_url`, writing rendered messages to `output`.
    pub fn new(queue: Q, config: &ConsumerConfig, output: W) -> Self {
        Consumer {
            queue,
            queue_url: config.queue_url.clone(),
            settings: config.receive,
            error_pause: config.error_pause,
            output,
        }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Issues one long-poll receive request.
    ///
    /// An empty result means the wait time elapsed without any message.
    pub async fn poll_once(&self) -> Result<Vec<ReceivedMessage>, ConsumerError> {
        self.queue.receive(&self.queue_url, &self.settings).await
    }

    /// Prints `message` and deletes it when it carries a receipt handle.
    pub async fn process_message(
        &mut self,
        message: &ReceivedMessage,
    ) -> Result<ProcessOutcome, ConsumerError> {
        debug!(
            "message {} attributes: {:?}, message attributes: {:?}",
            message.id_or_unknown(),
            message.attributes,
            message.message_attribute_names
        );

        writeln!(self.output, "\n=== Received Message ===")?;
        writeln!(self.output, "{}", render_body(&message.body))?;
        self.output.flush()?;

        let receipt_handle = match message.receipt_handle.as_deref() {
            Some(handle) if !handle.is_empty() => handle,
            _ => return Ok(ProcessOutcome::MissingReceiptHandle),
        };

        self.queue.delete(&self.queue_url, receipt_handle).await?;
        writeln!(self.output, "Deleted message.")?;
        self.output.flush()?;

        Ok(ProcessOutcome::Deleted)
    }

    /// Receives one batch and processes its messages in order.
    ///
    /// Returns the number of messages in the batch. The first error aborts the
    /// rest of the batch.
    pub async fn run_cycle(&mut self) -> Result<usize, ConsumerError> {
        let messages = self.poll_once().await?;
        if messages.is_empty() {
            return Ok(0);
        }

        for message in &messages {
            if self.process_message(message).await? == ProcessOutcome::MissingReceiptHandle {
                warn!("no receipt handle on message {}", message.id_or_unknown());
                writeln!(self.output, "Failed to process message: {}", message.id_or_unknown())?;
                self.output.flush()?;
            }
        }

        Ok(messages.len())
    }

    /// Polls until `shutdown` resolves.
    ///
    /// A failed cycle is logged and followed by a fixed pause before the next
    /// one. `shutdown` is observed while receiving, processing and pausing.
    pub async fn run_until_shutdown<S>(&mut self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        info!("Polling SQS: {}", self.queue_url);
        if let Err(e) = writeln!(self.output, "Polling SQS: {}", self.queue_url) {
            warn!("unable to write to output: {e}");
        }

        loop {
            let step = tokio::select! {
                _ = &mut shutdown => Step::Shutdown,
                result = self.run_cycle() => Step::Cycle(result),
            };

            match step {
                Step::Shutdown => break,
                Step::Cycle(Ok(count)) => debug!("processed {count} message(s)"),
                Step::Cycle(Err(e)) => {
                    error!("Error while polling: {e}");
                    tokio::select! {
                        _ = &mut shutdown => break,
                        _ = tokio::time::sleep(self.error_pause) => {}
                    }
                }
            }
        }

        info!("shutdown requested, stopping consumer");
        if let Err(e) = writeln!(self.output, "Exiting...").and_then(|_| self.output.flush()) {
            warn!("unable to write to output: {e}");
        }
    }

    /// Polls until the process receives Ctrl-C.
    pub async fn run(&mut self) {
        self.run_until_shutdown(ctrl_c()).await
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("unable to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
