use std::net::SocketAddr;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_catalog::auth::SessionKeys;
use book_catalog::infrastructure::AppState;
use book_catalog::{config, db, seed, server};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1))
        .cloned();

    let config = match config::Config::load(profile) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Using profile '{}' with database {}",
        config.profile,
        config.database_url
    );

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(
        db,
        SessionKeys::new(config.jwt_secret.clone(), config.session_hours),
    );

    if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
        && let Err(e) = seed::ensure_superuser(&state, username, password).await
    {
        tracing::error!("Failed to create superuser: {}", e);
        return ExitCode::FAILURE;
    }

    // Check for seed flag
    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&state).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    let app = server::build_router(state).layer(server::cors_layer(&config.cors_allowed_origins));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Book catalog listening on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
