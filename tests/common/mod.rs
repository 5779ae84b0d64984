//! Shared fixtures for the HTTP tests: a router over a seeded `MemoryStore`.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use biztime::{
    build_router,
    db::{CompanyRepository, IndustryRepository, MemoryStore},
    models::{company::CreateCompanyPayload, industry::CreateIndustryPayload},
    AppState,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Id of the single seeded invoice.
pub const IBM_INVOICE_ID: i32 = 1;

/// Seeds one company (`ibm`) with one unpaid invoice, two industries and a
/// single association `ibm` / `tech`. `acct` has no companies.
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();

    store
        .create_company(&CreateCompanyPayload {
            code: "ibm".to_string(),
            name: "IBM".to_string(),
            description: Some("Big Blue".to_string()),
        })
        .await
        .unwrap();

    let invoice = store
        .insert_invoice_row(
            "ibm",
            Decimal::new(100, 0),
            false,
            NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            None,
        )
        .unwrap();
    assert_eq!(invoice.id, IBM_INVOICE_ID);

    for (code, industry) in [("tech", "Technology"), ("acct", "Accounting")] {
        store
            .create_industry(&CreateIndustryPayload {
                code: code.to_string(),
                industry: industry.to_string(),
            })
            .await
            .unwrap();
    }

    store.add_industry("ibm", "tech").await.unwrap();

    store
}

pub async fn make_server() -> TestServer {
    let store = seeded_store().await;
    let router = build_router(AppState::with_store(Arc::new(store)));
    TestServer::new(router)
}
