// src/db/invoice_repo.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    db::{
        pg_store::PgStore,
        store::{InvoiceRepository, StoreResult},
    },
    models::{
        company::Company,
        invoice::{CreateInvoicePayload, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoicePayload},
    },
};

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

#[async_trait]
impl InvoiceRepository for PgStore {
    async fn list_invoices(&self) -> StoreResult<Vec<InvoiceSummary>> {
        tracing::debug!("SELECT invoices");
        let invoices = sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices")
            .fetch_all(&self.pool)
            .await?;

        Ok(invoices)
    }

    async fn find_invoice(&self, id: i32) -> StoreResult<Option<InvoiceDetail>> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!(id, "SELECT invoice");
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(invoice) = invoice else {
            return Ok(None);
        };

        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT c.code, c.name, c.description
            FROM companies AS c
            INNER JOIN invoices AS i
            ON c.code = i.comp_code
            WHERE i.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(InvoiceDetail::new(invoice, company)))
    }

    async fn create_invoice(&self, input: &CreateInvoicePayload) -> StoreResult<Invoice> {
        tracing::debug!(comp_code = %input.comp_code, "INSERT invoice");
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(&input.comp_code)
        .bind(input.amt)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: i32,
        changes: &UpdateInvoicePayload,
        today: NaiveDate,
    ) -> StoreResult<Option<Invoice>> {
        let mut tx = self.pool.begin().await?;

        tracing::debug!(id, "SELECT invoice FOR UPDATE");
        let current = sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let merged = current.apply(changes, today);

        tracing::debug!(id, "UPDATE invoice");
        let invoice = sqlx::query_as::<_, Invoice>(&format!(
            r#"
            UPDATE invoices
            SET amt = $1, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING {INVOICE_COLUMNS}
            "#
        ))
        .bind(merged.amt)
        .bind(merged.paid)
        .bind(merged.paid_date)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(invoice))
    }

    async fn delete_invoice(&self, id: i32) -> StoreResult<bool> {
        tracing::debug!(id, "DELETE invoice");
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
