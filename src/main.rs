use packsense_core::CompletionClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the packsense application
///
/// Starts the REST server that backs the packaging feedback form: session
/// management, sentiment analysis via the completion endpoint, and report
/// export. Swagger UI is served at `/swagger-ui`.
///
/// # Environment Variables
/// - `PACKSENSE_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `OPENAI_API_KEY`: credential for the completion endpoint; not validated
///   at startup, a missing key surfaces as an auth failure on the first call
/// - `OPENAI_BASE_URL`: completion endpoint base (default: "https://api.openai.com")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("packsense=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PACKSENSE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting packsense REST on {}", rest_addr);

    let client = CompletionClient::from_env();
    let app = api_rest::app(client);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
