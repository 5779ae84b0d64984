pub mod company_service;
pub use company_service::CompanyService;
pub mod invoice_service;
pub use invoice_service::InvoiceService;
pub mod industry_service;
pub use industry_service::IndustryService;
