//! Catalog Application CLI

use std::{process, sync::Arc};

use catalog_app::{
    database,
    products::{CatalogService, ProductsService, repository::PgProductsRepository},
};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Product catalog CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(DatabaseArgs),

    /// Insert the sample catalog if no products exist yet
    Seed(DatabaseArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Migrate(args) => migrate(args).await,
        Commands::Seed(args) => seed(args).await,
    }
}

async fn migrate(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    println!("migrations applied");

    Ok(())
}

async fn seed(args: DatabaseArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = CatalogService::new(Arc::new(PgProductsRepository::new(pool)));

    let inserted = service
        .seed_if_empty()
        .await
        .map_err(|error| format!("failed to seed products: {error}"))?;

    if inserted == 0 {
        println!("catalog already has products; nothing seeded");
    } else {
        println!("seeded {inserted} sample products");
    }

    Ok(())
}
