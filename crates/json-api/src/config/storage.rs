//! Storage Config

use clap::Args;

/// Where products are kept.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL`, via `DATABASE_URL`.
    Postgres,

    /// Process memory; contents are lost on exit.
    Memory,
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(long, env = "STORAGE", value_enum, default_value_t = StorageBackend::Postgres)]
    pub storage: StorageBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(
        long,
        env = "DATABASE_URL",
        required_if_eq("storage", "postgres"),
        hide_env_values = true
    )]
    pub database_url: Option<String>,

    /// Insert the sample catalog at startup when storage is empty
    #[arg(long, env = "SEED_SAMPLE_DATA", default_value_t = false)]
    pub seed_sample_data: bool,
}
