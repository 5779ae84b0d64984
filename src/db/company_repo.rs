// src/db/company_repo.rs

use async_trait::async_trait;
use sqlx::PgConnection;

use crate::{
    db::{
        pg_store::PgStore,
        store::{CompanyRepository, StoreResult},
    },
    models::company::{
        Company, CompanyDetail, CompanyIndustries, CompanySummary, CreateCompanyPayload,
        UpdateCompanyPayload,
    },
};

const INDUSTRY_NAMES_SQL: &str = r#"
    SELECT i.industry
    FROM industries AS i
    INNER JOIN companies_industries AS ci
    ON i.code = ci.ind_code
    WHERE ci.comp_code = $1
"#;

async fn industry_names(conn: &mut PgConnection, code: &str) -> StoreResult<Vec<String>> {
    tracing::debug!(code, "SELECT industry names for company");
    let names = sqlx::query_scalar::<_, String>(INDUSTRY_NAMES_SQL)
        .bind(code)
        .fetch_all(conn)
        .await?;
    Ok(names)
}

#[async_trait]
impl CompanyRepository for PgStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        tracing::debug!("SELECT companies");
        let companies = sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name FROM companies ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    async fn find_company(&self, code: &str) -> StoreResult<Option<CompanyDetail>> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!(code, "SELECT company");
        let company = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(company) = company else {
            return Ok(None);
        };

        let invoices = sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1")
            .bind(code)
            .fetch_all(&mut *tx)
            .await?;

        let industries = industry_names(&mut *tx, code).await?;

        tx.commit().await?;

        Ok(Some(CompanyDetail {
            company,
            invoices,
            industries,
        }))
    }

    async fn create_company(&self, input: &CreateCompanyPayload) -> StoreResult<Company> {
        tracing::debug!(code = %input.code, "INSERT company");
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(&input.code)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    async fn update_company(
        &self,
        code: &str,
        input: &UpdateCompanyPayload,
    ) -> StoreResult<Option<Company>> {
        tracing::debug!(code, "UPDATE company");
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn add_industry(&self, code: &str, ind_code: &str) -> StoreResult<CompanyIndustries> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!(code, ind_code, "INSERT companies_industries");
        sqlx::query("INSERT INTO companies_industries (comp_code, ind_code) VALUES ($1, $2)")
            .bind(code)
            .bind(ind_code)
            .execute(&mut *tx)
            .await?;

        // The foreign key guarantees the row exists at this point
        let company = sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_one(&mut *tx)
        .await?;

        let industries = industry_names(&mut *tx, code).await?;

        tx.commit().await?;

        Ok(CompanyIndustries {
            code: company.code,
            name: company.name,
            industries,
        })
    }

    async fn delete_company(&self, code: &str) -> StoreResult<bool> {
        tracing::debug!(code, "DELETE company");
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
