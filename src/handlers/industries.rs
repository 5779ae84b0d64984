// src/handlers/industries.rs

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
    models::industry::{CreateIndustryPayload, Industry, IndustryCompanies},
};

// GET /industries
#[utoipa::path(
    get,
    path = "/industries",
    tag = "Industries",
    responses(
        (status = 200, description = "`{industries: [...]}` with associated company codes", body = Vec<IndustryCompanies>)
    )
)]
pub async fn list_industries(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let industries = app_state.industry_service.list_industries().await?;

    Ok((StatusCode::OK, Json(json!({ "industries": industries }))))
}

// GET /industries/{code}
#[utoipa::path(
    get,
    path = "/industries/{code}",
    tag = "Industries",
    params(("code" = String, Path, description = "Industry code")),
    responses(
        (status = 200, description = "`{industry: {...}}`", body = IndustryCompanies),
        (status = 404, description = "Unknown industry")
    )
)]
pub async fn get_industry(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let industry = app_state.industry_service.get_industry(&code).await?;

    Ok((StatusCode::OK, Json(json!({ "industry": industry }))))
}

// POST /industries
#[utoipa::path(
    post,
    path = "/industries",
    tag = "Industries",
    request_body = CreateIndustryPayload,
    responses(
        (status = 201, description = "`{industry: {...}}`, code in slug form", body = Industry)
    )
)]
pub async fn create_industry(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateIndustryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let industry = app_state.industry_service.create_industry(payload).await?;

    Ok((StatusCode::CREATED, Json(json!({ "industry": industry }))))
}

// DELETE /industries/{code}
#[utoipa::path(
    delete,
    path = "/industries/{code}",
    tag = "Industries",
    params(("code" = String, Path, description = "Industry code")),
    responses(
        (status = 200, description = "`{status: \"deleted\"}`"),
        (status = 404, description = "Unknown industry")
    )
)]
pub async fn delete_industry(
    State(app_state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.industry_service.delete_industry(&code).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "deleted" }))))
}
