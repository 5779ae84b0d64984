// src/db/pg_store.rs

use sqlx::PgPool;

/// Postgres-backed store. The repository traits are implemented in
/// `company_repo`, `invoice_repo` and `industry_repo`.
///
/// Operations that issue more than one statement run inside a single
/// transaction, released on commit or rolled back on drop.
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
