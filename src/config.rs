use std::time::Duration;

/// Default queue, as created by the local LocalStack setup.
pub const DEFAULT_QUEUE_URL: &str = "http://localhost:4566/000000000000/message-blaster-events";

/// Parameters of every receive request.
///
/// # Fields
/// - `max_number_of_messages`: The maximum number of messages to receive in a single request.
/// - `wait_time_seconds`: The wait time for long polling, in seconds.
/// - `visibility_timeout_seconds`: How long received messages stay hidden from other consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiveSettings {
    /// The maximum number of messages to receive in a single request.
    pub max_number_of_messages: i32,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,

    /// The visibility timeout requested for returned messages, in seconds.
    pub visibility_timeout_seconds: i32,
}

impl Default for ReceiveSettings {
    fn default() -> Self {
        ReceiveSettings {
            max_number_of_messages: 10,
            wait_time_seconds: 10,
            visibility_timeout_seconds: 30,
        }
    }
}

/// Retry behaviour of the SDK client underneath the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySettings {
    /// Total attempts per request, including the first one.
    pub max_attempts: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        RetrySettings { max_attempts: 5 }
    }
}

/// Everything the consumer needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerConfig {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub endpoint_url: String,
    pub queue_url: String,
    pub retry: RetrySettings,
    pub receive: ReceiveSettings,

    /// Pause after a failed polling cycle.
    pub error_pause: Duration,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        ConsumerConfig {
            region: "us-east-1".to_string(),
            access_key_id: "fake".to_string(),
            secret_access_key: "fake".to_string(),
            endpoint_url: "http://localhost:4566".to_string(),
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            retry: RetrySettings::default(),
            receive: ReceiveSettings::default(),
            error_pause: Duration::from_secs(2),
        }
    }
}

impl ConsumerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Recognised variables are `AWS_REGION`, `AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY`, `SQS_ENDPOINT` and `SQS_QUEUE_URL`. Unset or
    /// empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConsumerConfig::default();
        let var = |key: &str, default: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(default)
        };

        ConsumerConfig {
            region: var("AWS_REGION", defaults.region),
            access_key_id: var("AWS_ACCESS_KEY_ID", defaults.access_key_id),
            secret_access_key: var("AWS_SECRET_ACCESS_KEY", defaults.secret_access_key),
            endpoint_url: var("SQS_ENDPOINT", defaults.endpoint_url),
            queue_url: var("SQS_QUEUE_URL", defaults.queue_url),
            ..defaults
        }
    }
}
