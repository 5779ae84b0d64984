pub mod store;
pub use store::{CompanyRepository, IndustryRepository, InvoiceRepository, StoreError, StoreResult};

pub mod pg_store;
pub use pg_store::PgStore;
pub mod company_repo;
pub mod invoice_repo;
pub mod industry_repo;

pub mod memory_store;
pub use memory_store::MemoryStore;
