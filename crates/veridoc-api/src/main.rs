use veridoc_core::Config;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (state, upstream client, routes)
    let (_state, router) = veridoc_api::setup::initialize_app(config.clone())?;

    // Start the server
    veridoc_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
