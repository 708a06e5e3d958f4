use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Shopfront catalog operations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations.
    Migrate,
    /// Fill the catalog with sample products. Runs migrations first.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = shopfront_core::load_app_config_from_env()?;
    let pool_config = shopfront_db::PoolConfig::from_app_config(&config);
    let pool = shopfront_db::connect_pool(&config.database_url, pool_config).await?;

    match cli.command {
        Commands::Migrate => {
            let applied = shopfront_db::run_migrations(&pool).await?;
            println!("applied {applied} migration(s)");
        }
        Commands::Seed => {
            shopfront_db::run_migrations(&pool).await?;
            let inserted = shopfront_db::seed_catalog(&pool).await?;
            println!("seeded {inserted} product(s)");
        }
    }

    Ok(())
}
