use sponsor_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, config, logger)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Sponsor server starting..."
    );

    // 2. Server state (store + email sender)
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
