use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vertex_desk::cli::Cli;
use vertex_desk::config;
use vertex_desk::errors::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Parse the command line before touching config or the database
    let cli = Cli::from_args();

    // 4. Load the catalog and settings
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!(
        suites = app_config.catalog.suites.len(),
        slots = app_config.catalog.dining.slots.len(),
        "Configuration loaded."
    );

    // 5. Initialize the database
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;
    info!("Database initialized.");

    // 6. Run the requested command
    cli.run(db, app_config).await
}
