// src/config.rs

use std::{env, net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{CompanyRepository, IndustryRepository, InvoiceRepository, MemoryStore, PgStore},
    services::{CompanyService, IndustryService, InvoiceService},
};

/// Which store backs the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            other => anyhow::bail!("unknown store '{other}', expected 'postgres' or 'memory'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
}

impl Config {
    /// Reads the environment (and a `.env` file, when present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/biztime".to_string());

        Ok(Self {
            database_url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_var("DATABASE_ACQUIRE_TIMEOUT_SECS", 3)?),
            bind_addr: parse_var("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            store: parse_var("BIZTIME_STORE", StoreKind::Postgres)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid value for {name} ('{raw}'): {e}")),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub company_service: CompanyService,
    pub invoice_service: InvoiceService,
    pub industry_service: IndustryService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        match config.store {
            StoreKind::Postgres => {
                let db_pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.acquire_timeout)
                    .connect(&config.database_url)
                    .await
                    .context("failed to connect to the database")?;

                tracing::info!("Database connection established");
                Ok(Self::with_store(Arc::new(PgStore::new(db_pool))))
            }
            StoreKind::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on shutdown");
                Ok(Self::with_store(Arc::new(MemoryStore::new())))
            }
        }
    }

    /// Wires every service to the same store.
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: CompanyRepository + InvoiceRepository + IndustryRepository + 'static,
    {
        Self {
            company_service: CompanyService::new(store.clone()),
            invoice_service: InvoiceService::new(store.clone()),
            industry_service: IndustryService::new(store),
        }
    }
}
