use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::config::{Credentials, SharedCredentialsProvider};

use crate::config::ConsumerConfig;

/// Builds the SQS client configuration described by `config`.
///
/// Uses static credentials, an explicit region and endpoint, and the SDK's
/// standard retry mode with `config.retry.max_attempts` attempts per request.
pub fn sqs_config(config: &ConsumerConfig) -> aws_sdk_sqs::Config {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "environment",
    );

    let retry_config = RetryConfig::standard().with_max_attempts(config.retry.max_attempts);

    aws_sdk_sqs::config::Builder::new()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(SharedCredentialsProvider::new(credentials))
        .endpoint_url(&config.endpoint_url)
        .retry_config(retry_config)
        .build()
}

/// Creates an AWS SQS client from a resolved [`ConsumerConfig`].
///
/// # Example
///
/// ```rust,no_run
/// use sqs_pretty_consumer::{client::create_sqs_client, config::ConsumerConfig};
///
/// let client = create_sqs_client(&ConsumerConfig::default());
/// ```
pub fn create_sqs_client(config: &ConsumerConfig) -> aws_sdk_sqs::Client {
    aws_sdk_sqs::Client::from_conf(sqs_config(config))
}
