use budgetbook_server::{
    api::app_router,
    build_state,
    commands::{init_db, seed_db},
    config::Config,
    init_tracing,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "budgetbook-server", about = "Personal budgeting HTTP backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Create the database file and apply the schema
    InitDb,
    /// Insert the sample user
    SeedDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let state = build_state(&config).await?;
            let router = app_router(state, &config);
            tracing::info!("Listening on {}", config.listen_addr);
            let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
            axum::serve(listener, router).await?;
        }
        Commands::InitDb => init_db(&config)?,
        Commands::SeedDb => seed_db(&config).await?,
    }
    Ok(())
}
