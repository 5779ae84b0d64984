// src/handlers/invoices.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::invoice::{
        CreateInvoicePayload, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoicePayload,
    },
};

// GET /invoices
#[utoipa::path(
    get,
    path = "/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "`{invoices: [...]}`", body = Vec<InvoiceSummary>)
    )
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.invoice_service.list_invoices().await?;

    Ok((StatusCode::OK, Json(json!({ "invoices": invoices }))))
}

// GET /invoices/{id}
#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "`{invoice: {...}}` with the company nested", body = InvoiceDetail),
        (status = 404, description = "Unknown invoice")
    )
)]
pub async fn get_invoice(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.invoice_service.get_invoice(id).await?;

    Ok((StatusCode::OK, Json(json!({ "invoice": invoice }))))
}

// POST /invoices
#[utoipa::path(
    post,
    path = "/invoices",
    tag = "Invoices",
    request_body = CreateInvoicePayload,
    responses(
        (status = 201, description = "`{invoice: {...}}`, unpaid and dated today", body = Invoice)
    )
)]
pub async fn create_invoice(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateInvoicePayload>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = app_state.invoice_service.create_invoice(payload).await?;

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

// PATCH /invoices/{id}
#[utoipa::path(
    patch,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    request_body = UpdateInvoicePayload,
    responses(
        (status = 200, description = "`{invoice: {...}}` after the merge; a bodyless request changes nothing", body = Invoice),
        (status = 404, description = "Unknown invoice")
    )
)]
pub async fn update_invoice(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    payload: Option<AppJson<UpdateInvoicePayload>>,
) -> Result<impl IntoResponse, AppError> {
    // No body means no changes
    let changes = payload.map(|AppJson(p)| p).unwrap_or_default();
    let invoice = app_state.invoice_service.update_invoice(id, changes).await?;

    Ok((StatusCode::OK, Json(json!({ "invoice": invoice }))))
}

// DELETE /invoices/{id}
#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(("id" = i32, Path, description = "Invoice id")),
    responses(
        (status = 200, description = "`{status: \"deleted\"}`"),
        (status = 404, description = "Unknown invoice")
    )
)]
pub async fn delete_invoice(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    app_state.invoice_service.delete_invoice(id).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "deleted" }))))
}
