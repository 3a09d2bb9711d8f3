use axum::serve;
use staff_api::api::middleware::cors_layer;
use staff_api::api::routes::create_router;
use staff_api::config::AppConfig;
use staff_api::seed;
use staff_api::store::MemoryStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Pixell River Staff API");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let store = Arc::new(MemoryStore::new());

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
        println!("Seed data loaded successfully");
    }

    let app = create_router()
        .with_state(store)
        .layer(cors_layer(&config.cors)?);

    run_server(app, &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Staff API server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
