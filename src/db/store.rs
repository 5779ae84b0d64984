// src/db/store.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    company::{Company, CompanyDetail, CompanyIndustries, CompanySummary, CreateCompanyPayload, UpdateCompanyPayload},
    industry::{CreateIndustryPayload, Industry, IndustryCompanies},
    invoice::{CreateInvoicePayload, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoicePayload},
};

// Constraint names as declared in db/schema.sql
pub const COMPANIES_PKEY: &str = "companies_pkey";
pub const COMPANIES_NAME_KEY: &str = "companies_name_key";
pub const INDUSTRIES_PKEY: &str = "industries_pkey";
pub const INDUSTRIES_INDUSTRY_KEY: &str = "industries_industry_key";
pub const COMPANIES_INDUSTRIES_PKEY: &str = "companies_industries_pkey";
pub const COMPANIES_INDUSTRIES_COMP_FKEY: &str = "companies_industries_comp_code_fkey";
pub const COMPANIES_INDUSTRIES_IND_FKEY: &str = "companies_industries_ind_code_fkey";
pub const INVOICES_COMP_FKEY: &str = "invoices_comp_code_fkey";
pub const INVOICES_AMT_CHECK: &str = "invoices_amt_check";

/// Failures surfaced by a store, with constraint violations already classified.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint '{constraint}' violated")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint '{constraint}' violated")]
    ForeignKeyViolation { constraint: String },

    #[error("check constraint '{constraint}' violated")]
    CheckViolation { constraint: String },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation { constraint };
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation { constraint };
            }
            if db_err.is_check_violation() {
                return StoreError::CheckViolation { constraint };
            }
        }
        StoreError::Database(e)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
//  REPOSITORIES
// =============================================================================

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All companies ordered by name.
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>>;

    /// The company with its invoice ids and industry names, or `None` if the code is unknown.
    async fn find_company(&self, code: &str) -> StoreResult<Option<CompanyDetail>>;

    /// Inserts with `input.code` used verbatim; callers slugify first.
    async fn create_company(&self, input: &CreateCompanyPayload) -> StoreResult<Company>;

    async fn update_company(&self, code: &str, input: &UpdateCompanyPayload) -> StoreResult<Option<Company>>;

    /// Inserts the association and reads back the company with all its industries.
    async fn add_industry(&self, code: &str, ind_code: &str) -> StoreResult<CompanyIndustries>;

    /// Returns whether a row was deleted.
    async fn delete_company(&self, code: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>>;

    async fn find_invoice(&self, id: i32) -> StoreResult<Option<InvoiceDetail>>;

    async fn create_invoice(&self, input: &CreateInvoicePayload) -> StoreResult<Invoice>;

    /// Reads the current row, merges `changes` with [`Invoice::apply`] and persists the result.
    async fn update_invoice(
        &self,
        id: i32,
        changes: &UpdateInvoicePayload,
        today: NaiveDate,
    ) -> StoreResult<Option<Invoice>>;

    async fn delete_invoice(&self, id: i32) -> StoreResult<bool>;
}

#[async_trait]
pub trait IndustryRepository: Send + Sync {
    async fn list_industries(&self) -> StoreResult<Vec<IndustryCompanies>>;

    async fn find_industry(&self, code: &str) -> StoreResult<Option<IndustryCompanies>>;

    async fn create_industry(&self, input: &CreateIndustryPayload) -> StoreResult<Industry>;

    async fn delete_industry(&self, code: &str) -> StoreResult<bool>;
}
