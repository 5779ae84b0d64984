// src/db/memory_store.rs

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    db::store::{
        CompanyRepository, IndustryRepository, InvoiceRepository, StoreError, StoreResult,
        COMPANIES_INDUSTRIES_COMP_FKEY, COMPANIES_INDUSTRIES_IND_FKEY, COMPANIES_INDUSTRIES_PKEY,
        COMPANIES_NAME_KEY, COMPANIES_PKEY, INDUSTRIES_INDUSTRY_KEY, INDUSTRIES_PKEY,
        INVOICES_AMT_CHECK, INVOICES_COMP_FKEY,
    },
    models::{
        company::{
            Company, CompanyDetail, CompanyIndustries, CompanySummary, CreateCompanyPayload,
            UpdateCompanyPayload,
        },
        industry::{CreateIndustryPayload, Industry, IndustryCompanies},
        invoice::{CreateInvoicePayload, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoicePayload},
    },
};

#[derive(Default)]
struct Tables {
    // Vectors keep insertion order, like an unsorted heap scan
    companies: Vec<Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
    industries: Vec<Industry>,
    // (comp_code, ind_code)
    companies_industries: Vec<(String, String)>,
}

impl Tables {
    fn company(&self, code: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.code == code)
    }

    fn industry(&self, code: &str) -> Option<&Industry> {
        self.industries.iter().find(|i| i.code == code)
    }

    fn industry_names(&self, comp_code: &str) -> Vec<String> {
        self.companies_industries
            .iter()
            .filter(|(c, _)| c == comp_code)
            .filter_map(|(_, i)| self.industry(i).map(|ind| ind.industry.clone()))
            .collect()
    }

    fn company_codes(&self, ind_code: &str) -> Vec<String> {
        self.companies_industries
            .iter()
            .filter(|(_, i)| i == ind_code)
            .map(|(c, _)| c.clone())
            .collect()
    }
}

fn check_amt(amt: Decimal) -> StoreResult<()> {
    if amt <= Decimal::ZERO {
        return Err(StoreError::CheckViolation {
            constraint: INVOICES_AMT_CHECK.to_string(),
        });
    }
    Ok(())
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

fn foreign_key(constraint: &str) -> StoreError {
    StoreError::ForeignKeyViolation {
        constraint: constraint.to_string(),
    }
}

/// Process-local store enforcing the same keys, uniqueness, foreign keys
/// (with cascading deletes) and checks as `db/schema.sql`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::Unavailable(format!("failed to acquire read lock: {e}")))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| StoreError::Unavailable(format!("failed to acquire write lock: {e}")))
    }

    /// Inserts an invoice with explicit payment columns, as fixtures do.
    pub fn insert_invoice_row(
        &self,
        comp_code: &str,
        amt: Decimal,
        paid: bool,
        add_date: NaiveDate,
        paid_date: Option<NaiveDate>,
    ) -> StoreResult<Invoice> {
        let mut tables = self.write()?;
        if tables.company(comp_code).is_none() {
            return Err(foreign_key(INVOICES_COMP_FKEY));
        }
        check_amt(amt)?;

        tables.last_invoice_id += 1;
        let invoice = Invoice {
            id: tables.last_invoice_id,
            comp_code: comp_code.to_string(),
            amt,
            paid,
            add_date,
            paid_date,
        };
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn list_companies(&self) -> StoreResult<Vec<CompanySummary>> {
        let tables = self.read()?;
        let mut companies: Vec<CompanySummary> = tables
            .companies
            .iter()
            .map(|c| CompanySummary {
                code: c.code.clone(),
                name: c.name.clone(),
            })
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn find_company(&self, code: &str) -> StoreResult<Option<CompanyDetail>> {
        let tables = self.read()?;
        let Some(company) = tables.company(code) else {
            return Ok(None);
        };

        let invoices = tables
            .invoices
            .values()
            .filter(|i| i.comp_code == code)
            .map(|i| i.id)
            .collect();

        Ok(Some(CompanyDetail {
            company: company.clone(),
            invoices,
            industries: tables.industry_names(code),
        }))
    }

    async fn create_company(&self, input: &CreateCompanyPayload) -> StoreResult<Company> {
        let mut tables = self.write()?;
        if tables.company(&input.code).is_some() {
            return Err(unique(COMPANIES_PKEY));
        }
        if tables.companies.iter().any(|c| c.name == input.name) {
            return Err(unique(COMPANIES_NAME_KEY));
        }

        let company = Company {
            code: input.code.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
        };
        tables.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        code: &str,
        input: &UpdateCompanyPayload,
    ) -> StoreResult<Option<Company>> {
        let mut tables = self.write()?;
        if tables
            .companies
            .iter()
            .any(|c| c.code != code && c.name == input.name)
        {
            return Err(unique(COMPANIES_NAME_KEY));
        }

        let Some(company) = tables.companies.iter_mut().find(|c| c.code == code) else {
            return Ok(None);
        };
        company.name = input.name.clone();
        company.description = input.description.clone();
        Ok(Some(company.clone()))
    }

    async fn add_industry(&self, code: &str, ind_code: &str) -> StoreResult<CompanyIndustries> {
        let mut tables = self.write()?;
        let link = (code.to_string(), ind_code.to_string());
        if tables.companies_industries.contains(&link) {
            return Err(unique(COMPANIES_INDUSTRIES_PKEY));
        }
        let Some(company) = tables.company(code) else {
            return Err(foreign_key(COMPANIES_INDUSTRIES_COMP_FKEY));
        };
        let name = company.name.clone();
        if tables.industry(ind_code).is_none() {
            return Err(foreign_key(COMPANIES_INDUSTRIES_IND_FKEY));
        }

        tables.companies_industries.push(link);

        Ok(CompanyIndustries {
            code: code.to_string(),
            name,
            industries: tables.industry_names(code),
        })
    }

    async fn delete_company(&self, code: &str) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.companies.len();
        tables.companies.retain(|c| c.code != code);
        if tables.companies.len() == before {
            return Ok(false);
        }

        tables.invoices.retain(|_, i| i.comp_code != code);
        tables.companies_industries.retain(|(c, _)| c != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceRepository for MemoryStore {
    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .values()
            .map(|i| InvoiceSummary {
                id: i.id,
                comp_code: i.comp_code.clone(),
            })
            .collect())
    }

    async fn find_invoice(&self, id: i32) -> StoreResult<Option<InvoiceDetail>> {
        let tables = self.read()?;
        let Some(invoice) = tables.invoices.get(&id) else {
            return Ok(None);
        };
        let company = tables.company(&invoice.comp_code).cloned().ok_or_else(|| {
            StoreError::Unavailable(format!("invoice {id} references a missing company"))
        })?;

        Ok(Some(InvoiceDetail::new(invoice.clone(), company)))
    }

    async fn create_invoice(&self, input: &CreateInvoicePayload) -> StoreResult<Invoice> {
        self.insert_invoice_row(
            &input.comp_code,
            input.amt,
            false,
            Utc::now().date_naive(),
            None,
        )
    }

    async fn update_invoice(
        &self,
        id: i32,
        changes: &UpdateInvoicePayload,
        today: NaiveDate,
    ) -> StoreResult<Option<Invoice>> {
        let mut tables = self.write()?;
        let Some(current) = tables.invoices.get(&id).cloned() else {
            return Ok(None);
        };

        let merged = current.apply(changes, today);
        check_amt(merged.amt)?;
        tables.invoices.insert(id, merged.clone());
        Ok(Some(merged))
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.invoices.remove(&id).is_some())
    }
}

#[async_trait]
impl IndustryRepository for MemoryStore {
    async fn list_industries(&self) -> StoreResult<Vec<IndustryCompanies>> {
        let tables = self.read()?;
        Ok(tables
            .industries
            .iter()
            .map(|i| IndustryCompanies {
                code: i.code.clone(),
                companies: tables.company_codes(&i.code),
            })
            .collect())
    }

    async fn find_industry(&self, code: &str) -> StoreResult<Option<IndustryCompanies>> {
        let tables = self.read()?;
        Ok(tables.industry(code).map(|i| IndustryCompanies {
            code: i.code.clone(),
            companies: tables.company_codes(&i.code),
        }))
    }

    async fn create_industry(&self, input: &CreateIndustryPayload) -> StoreResult<Industry> {
        let mut tables = self.write()?;
        if tables.industry(&input.code).is_some() {
            return Err(unique(INDUSTRIES_PKEY));
        }
        if tables.industries.iter().any(|i| i.industry == input.industry) {
            return Err(unique(INDUSTRIES_INDUSTRY_KEY));
        }

        let industry = Industry {
            code: input.code.clone(),
            industry: input.industry.clone(),
        };
        tables.industries.push(industry.clone());
        Ok(industry)
    }

    async fn delete_industry(&self, code: &str) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.industries.len();
        tables.industries.retain(|i| i.code != code);
        if tables.industries.len() == before {
            return Ok(false);
        }

        tables.companies_industries.retain(|(_, i)| i != code);
        Ok(true)
    }
}
