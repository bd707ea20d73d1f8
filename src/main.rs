use sqs_pretty_consumer::client::create_sqs_client;
use sqs_pretty_consumer::config::ConsumerConfig;
use sqs_pretty_consumer::consumer::Consumer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let config = ConsumerConfig::from_env();
    log::debug!("resolved configuration: region={} endpoint={}", config.region, config.endpoint_url);

    let client = create_sqs_client(&config);
    let mut consumer = Consumer::new(client, &config, std::io::stdout());
    consumer.run().await;

    Ok(())
}
