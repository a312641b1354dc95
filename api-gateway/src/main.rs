//! API Gateway for the account directory

use std::sync::Arc;

use clap::Parser;
use common::model::account::{Account, AccountTier};
use dotenv::dotenv;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_gateway::api;
use api_gateway::config::AppConfig;
use api_gateway::{router, AppState};
use directory_service::DirectoryService;

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health routes
        api::health::ping,
        // Account routes
        api::account::list_accounts,
        api::account::get_account,
        api::account::delete_account,
        api::account::update_account,
    ),
    components(
        schemas(
            api::account::UpdateAccountRequest,
            common::model::account::Account,
            common::model::account::AccountTier,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "account", description = "Account directory endpoints")
    ),
    info(
        title = "Account Directory API",
        version = "1.0.0",
        description = "API for the account directory allowing accounts to be listed, retrieved, updated, and deleted"
    )
)]
struct ApiDoc;

/// Account directory API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address, defaults to 127.0.0.1 with the configured port
    #[clap(short, long)]
    addr: Option<String>,
}

/// Static seed for the directory, standing in for the external seed source
fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new("a1", "Ana", dec!(1000), AccountTier::Gold),
        Account::new("a2", "Bruno", dec!(250.50), AccountTier::Black),
        Account::new("a3", "Carla", dec!(0), AccountTier::Platinum),
    ]
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse("tower_http=debug,api_gateway=debug")
        .expect("Invalid log filter");

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    debug!("Debug logging enabled");

    // Initialize the directory service with the seed accounts
    let config = AppConfig::new();
    let accounts = seed_accounts();
    info!("Seeding directory with {} accounts", accounts.len());
    let directory = Arc::new(DirectoryService::with_accounts(accounts));

    // Create app state
    let state = Arc::new(AppState { directory });

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Set up Swagger UI
    let swagger_ui = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    // Combine all routes
    let app = router(state)
        .merge(swagger_ui)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(log_level))
                .on_request(DefaultOnRequest::new().level(log_level))
                .on_response(DefaultOnResponse::new().level(log_level)),
        );

    // Start the server
    let addr = args
        .addr
        .unwrap_or_else(|| format!("127.0.0.1:{}", config.port));
    let addr: std::net::SocketAddr = addr.parse().expect("Invalid address");
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
