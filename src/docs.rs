// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "BizTime", description = "Companies, invoices and industries"),
    paths(
        // --- Companies ---
        handlers::companies::list_companies,
        handlers::companies::get_company,
        handlers::companies::create_company,
        handlers::companies::update_company,
        handlers::companies::add_industry,
        handlers::companies::delete_company,

        // --- Invoices ---
        handlers::invoices::list_invoices,
        handlers::invoices::get_invoice,
        handlers::invoices::create_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,

        // --- Industries ---
        handlers::industries::list_industries,
        handlers::industries::get_industry,
        handlers::industries::create_industry,
        handlers::industries::delete_industry,
    ),
    components(
        schemas(
            // --- Companies ---
            models::company::CompanySummary,
            models::company::Company,
            models::company::CompanyDetail,
            models::company::CompanyIndustries,
            models::company::CreateCompanyPayload,
            models::company::UpdateCompanyPayload,
            models::company::AddIndustryPayload,

            // --- Invoices ---
            models::invoice::InvoiceSummary,
            models::invoice::Invoice,
            models::invoice::InvoiceDetail,
            models::invoice::CreateInvoicePayload,
            models::invoice::UpdateInvoicePayload,

            // --- Industries ---
            models::industry::Industry,
            models::industry::IndustryCompanies,
            models::industry::CreateIndustryPayload,
        )
    ),
    tags(
        (name = "Companies", description = "Companies and their industry associations"),
        (name = "Invoices", description = "Invoices billed to companies"),
        (name = "Industries", description = "Industry catalogue")
    )
)]
pub struct ApiDoc;
