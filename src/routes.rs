// src/routes.rs

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

/// Full application router: API routes, docs and request tracing.
pub fn build_router(app_state: AppState) -> Router {
    let company_routes = Router::new()
        .route(
            "/",
            get(handlers::companies::list_companies).post(handlers::companies::create_company),
        )
        .route(
            "/{code}",
            get(handlers::companies::get_company)
                .put(handlers::companies::update_company)
                .delete(handlers::companies::delete_company),
        )
        .route(
            "/{code}/add-industry",
            patch(handlers::companies::add_industry),
        );

    let invoice_routes = Router::new()
        .route(
            "/",
            get(handlers::invoices::list_invoices).post(handlers::invoices::create_invoice),
        )
        .route(
            "/{id}",
            get(handlers::invoices::get_invoice)
                .patch(handlers::invoices::update_invoice)
                .delete(handlers::invoices::delete_invoice),
        );

    let industry_routes = Router::new()
        .route(
            "/",
            get(handlers::industries::list_industries).post(handlers::industries::create_industry),
        )
        .route(
            "/{code}",
            get(handlers::industries::get_industry).delete(handlers::industries::delete_industry),
        );

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/companies", company_routes)
        .nest("/invoices", invoice_routes)
        .nest("/industries", industry_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
