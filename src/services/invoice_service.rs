// src/services/invoice_service.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::InvoiceRepository,
    models::invoice::{CreateInvoicePayload, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoicePayload},
};

#[derive(Clone)]
pub struct InvoiceService {
    repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(repo: Arc<dyn InvoiceRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, AppError> {
        Ok(self.repo.list_invoices().await?)
    }

    pub async fn get_invoice(&self, id: i32) -> Result<InvoiceDetail, AppError> {
        self.repo
            .find_invoice(id)
            .await?
            .ok_or_else(|| AppError::record_not_found(id))
    }

    /// New invoices start unpaid and dated today.
    pub async fn create_invoice(&self, input: CreateInvoicePayload) -> Result<Invoice, AppError> {
        let invoice = self.repo.create_invoice(&input).await?;
        tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
        Ok(invoice)
    }

    pub async fn update_invoice(
        &self,
        id: i32,
        changes: UpdateInvoicePayload,
    ) -> Result<Invoice, AppError> {
        let today = Utc::now().date_naive();

        self.repo
            .update_invoice(id, &changes, today)
            .await?
            .ok_or_else(|| AppError::record_not_found(id))
    }

    pub async fn delete_invoice(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete_invoice(id).await? {
            return Err(AppError::record_not_found(id));
        }
        tracing::info!(id, "invoice deleted");
        Ok(())
    }
}
