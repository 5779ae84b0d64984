// src/handlers/companies.rs

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
    models::company::{
        AddIndustryPayload, Company, CompanyDetail, CompanyIndustries, CompanySummary,
        CreateCompanyPayload, UpdateCompanyPayload,
    },
};

// GET /companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "`{companies: [...]}` ordered by name", body = Vec<CompanySummary>)
    )
)]
pub async fn list_companies(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let companies = app_state.company_service.list_companies().await?;

    Ok((StatusCode::OK, Json(json!({ "companies": companies }))))
}

// GET /companies/{code}
#[utoipa::path(
    get,
    path = "/companies/{code}",
    tag = "Companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "`{company: {...}}` with invoice ids and industry names", body = CompanyDetail),
        (status = 404, description = "Unknown company")
    )
)]
pub async fn get_company(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state.company_service.get_company(&code).await?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

// POST /companies
#[utoipa::path(
    post,
    path = "/companies",
    tag = "Companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "`{company: {...}}`, code in slug form", body = Company),
        (status = 500, description = "Code or name already taken")
    )
)]
pub async fn create_company(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state.company_service.create_company(payload).await?;

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

// PUT /companies/{code}
#[utoipa::path(
    put,
    path = "/companies/{code}",
    tag = "Companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "`{company: {...}}`", body = Company),
        (status = 400, description = "Missing body for an existing company"),
        (status = 404, description = "Unknown company")
    )
)]
pub async fn update_company(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
    payload: Option<AppJson<UpdateCompanyPayload>>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.map(|AppJson(p)| p);
    let company = app_state
        .company_service
        .update_company(&code, payload)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

// PATCH /companies/{code}/add-industry
#[utoipa::path(
    patch,
    path = "/companies/{code}/add-industry",
    tag = "Companies",
    params(("code" = String, Path, description = "Company code")),
    request_body = AddIndustryPayload,
    responses(
        (status = 200, description = "`{company: {...}}` with the refreshed industry names", body = CompanyIndustries),
        (status = 400, description = "Industry already associated"),
        (status = 404, description = "Unknown company or industry")
    )
)]
pub async fn add_industry(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
    AppJson(payload): AppJson<AddIndustryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let company = app_state
        .company_service
        .add_industry(&code, &payload.ind_code)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "company": company }))))
}

// DELETE /companies/{code}
#[utoipa::path(
    delete,
    path = "/companies/{code}",
    tag = "Companies",
    params(("code" = String, Path, description = "Company code")),
    responses(
        (status = 200, description = "`{status: \"deleted\"}`"),
        (status = 404, description = "Unknown company")
    )
)]
pub async fn delete_company(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.company_service.delete_company(&code).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "deleted" }))))
}
