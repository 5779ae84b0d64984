// src/db/industry_repo.rs

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::{
    db::{
        pg_store::PgStore,
        store::{IndustryRepository, StoreResult},
    },
    models::industry::{CreateIndustryPayload, Industry, IndustryCompanies},
};

async fn company_codes(conn: &mut PgConnection, ind_code: &str) -> StoreResult<Vec<String>> {
    tracing::debug!(ind_code, "SELECT company codes for industry");
    let codes = sqlx::query_scalar::<_, String>(
        r#"
        SELECT ci.comp_code
        FROM companies_industries AS ci
        WHERE ci.ind_code = $1
        "#,
    )
    .bind(ind_code)
    .fetch_all(conn)
    .await?;

    Ok(codes)
}

#[async_trait]
impl IndustryRepository for PgStore {
    async fn list_industries(&self) -> StoreResult<Vec<IndustryCompanies>> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!("SELECT industries");
        let codes = sqlx::query_scalar::<_, String>("SELECT code FROM industries")
            .fetch_all(&mut *tx)
            .await?;

        let mut industries = Vec::with_capacity(codes.len());
        for code in codes {
            let companies = company_codes(&mut *tx, &code).await?;
            industries.push(IndustryCompanies { code, companies });
        }

        tx.commit().await?;

        Ok(industries)
    }

    async fn find_industry(&self, code: &str) -> StoreResult<Option<IndustryCompanies>> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!(code, "SELECT industry");
        let found = sqlx::query_scalar::<_, String>("SELECT code FROM industries WHERE code = $1")
            .bind(code)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(code) = found else {
            return Ok(None);
        };

        let companies = company_codes(&mut *tx, &code).await?;

        tx.commit().await?;

        Ok(Some(IndustryCompanies { code, companies }))
    }

    async fn create_industry(&self, input: &CreateIndustryPayload) -> StoreResult<Industry> {
        tracing::debug!(code = %input.code, "INSERT industry");
        let industry = sqlx::query_as::<_, Industry>(
            r#"
            INSERT INTO industries (code, industry)
            VALUES ($1, $2)
            RETURNING code, industry
            "#,
        )
        .bind(&input.code)
        .bind(&input.industry)
        .fetch_one(&self.pool)
        .await?;

        Ok(industry)
    }

    async fn delete_industry(&self, code: &str) -> StoreResult<bool> {
        tracing::debug!(code, "DELETE industry");
        let result = sqlx::query("DELETE FROM industries WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
