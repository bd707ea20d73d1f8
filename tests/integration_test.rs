//! Round trip against a real queue (LocalStack or AWS).
//!
//! Run with `TEST_SQS_QUEUE_URL` set (a `.env` file is honoured) and
//! `cargo test -- --ignored`.

use std::env;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sqs_pretty_consumer::client::create_sqs_client;
use sqs_pretty_consumer::config::ConsumerConfig;
use sqs_pretty_consumer::consumer::Consumer;
use tokio::time::timeout;

#[derive(Clone, Default)]
struct SharedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedOutput {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
#[ignore = "needs a running SQS endpoint and TEST_SQS_QUEUE_URL"]
async fn test_sqs_round_trip() {
    dotenvy::dotenv().ok();

    let queue_url = env::var("TEST_SQS_QUEUE_URL").expect("TEST_SQS_QUEUE_URL must be set");
    let config = ConsumerConfig {
        queue_url: queue_url.clone(),
        ..ConsumerConfig::from_env()
    };

    let sqs_client = create_sqs_client(&config);

    sqs_client
        .purge_queue()
        .queue_url(&queue_url)
        .send()
        .await
        .ok();

    sqs_client
        .send_message()
        .queue_url(&queue_url)
        .message_body(r#"{"type":"sent","id":7}"#)
        .send()
        .await
        .expect("Failed to send JSON test message");

    sqs_client
        .send_message()
        .queue_url(&queue_url)
        .message_body("plain text message")
        .send()
        .await
        .expect("Failed to send text test message");

    let output = SharedOutput::default();
    let watched = output.clone();
    let mut consumer = Consumer::new(sqs_client.clone(), &config, output);

    let shutdown = async move {
        while watched.text().matches("Deleted message.").count() < 2 {
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    timeout(Duration::from_secs(60), consumer.run_until_shutdown(shutdown))
        .await
        .expect("Test timed out before both messages were deleted");

    let text = consumer.output().text();
    assert!(text.contains("{\n  \"id\": 7,\n  \"type\": \"sent\"\n}"));
    assert!(text.contains("plain text message"));
    assert!(text.ends_with("Exiting...\n"));

    let remaining = sqs_client
        .receive_message()
        .queue_url(&queue_url)
        .wait_time_seconds(1)
        .send()
        .await
        .expect("Failed to check queue");
    assert!(remaining.messages().is_empty(), "printed messages should be deleted");
}
