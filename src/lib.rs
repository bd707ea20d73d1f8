//! # SQS Pretty Consumer
//!
//! A small consumer that long-polls a single AWS SQS queue (or a local emulator
//! such as LocalStack), pretty-prints every message body as JSON and deletes the
//! message once it has been printed.
//!
//! ## Features
//!
//! - Long polling with a bounded batch size, wait time and visibility timeout
//! - JSON bodies rendered with sorted keys and two-space indentation
//! - Non-JSON bodies printed verbatim
//! - Delete-after-print acknowledgment by receipt handle
//! - Fixed pause-and-retry on any failure of a polling cycle
//! - Clean exit on Ctrl-C
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqs_pretty_consumer::{client::create_sqs_client, config::ConsumerConfig, consumer::Consumer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ConsumerConfig::from_env();
//!     let client = create_sqs_client(&config);
//!
//!     let mut consumer = Consumer::new(client, &config, std::io::stdout());
//!     consumer.run().await;
//! }
//! ```

pub mod client;
pub mod config;
pub mod consumer;
pub mod errors;
pub mod format;
pub mod queue;
