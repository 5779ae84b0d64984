//! HTTP tests for `/companies`.

mod common;

use axum::http::StatusCode;
use common::make_server;
use serde_json::{json, Value};

#[tokio::test]
async fn health_check_answers_ok() {
    let server = make_server().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("OK");
}

#[tokio::test]
async fn list_companies_returns_code_and_name() {
    let server = make_server().await;

    let response = server.get("/companies").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "companies": [{ "code": "ibm", "name": "IBM" }] }));
}

#[tokio::test]
async fn list_companies_is_ordered_by_name() {
    let server = make_server().await;

    server
        .post("/companies")
        .json(&json!({ "code": "apple", "name": "Apple", "description": "Maker of OSX" }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/companies").await.json();
    let names: Vec<&str> = body["companies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "IBM"]);
}

#[tokio::test]
async fn get_company_includes_invoice_ids_and_industries() {
    let server = make_server().await;

    let response = server.get("/companies/ibm").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "company": {
                "code": "ibm",
                "name": "IBM",
                "description": "Big Blue",
                "invoices": [common::IBM_INVOICE_ID],
                "industries": ["Technology"]
            }
        })
    );
}

#[tokio::test]
async fn get_unknown_company_is_404() {
    let server = make_server().await;

    let response = server.get("/companies/INVALID_CODE").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Can't find record with primary key INVALID_CODE"
    );
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn create_company_slugifies_the_code() {
    let server = make_server().await;

    let response = server
        .post("/companies")
        .json(&json!({ "code": "Acme Co", "name": "Acme", "description": "x" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "company": { "code": "acme-co", "name": "Acme", "description": "x" } })
    );

    let fetched: Value = server.get("/companies/acme-co").await.json();
    assert_eq!(fetched["company"]["name"], "Acme");
    assert_eq!(fetched["company"]["description"], "x");
    assert_eq!(fetched["company"]["invoices"], json!([]));
    assert_eq!(fetched["company"]["industries"], json!([]));
}

#[tokio::test]
async fn create_company_with_taken_code_is_a_server_error() {
    let server = make_server().await;

    let response = server
        .post("/companies")
        .json(&json!({ "code": "IBM", "name": "Other", "description": null }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 500);
}

#[tokio::test]
async fn update_company_replaces_name_and_description() {
    let server = make_server().await;

    let response = server
        .put("/companies/ibm")
        .json(&json!({ "name": "International Business Machines", "description": "Blue" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "company": {
                "code": "ibm",
                "name": "International Business Machines",
                "description": "Blue"
            }
        })
    );
}

#[tokio::test]
async fn update_unknown_company_is_404() {
    let server = make_server().await;

    server
        .put("/companies/nope")
        .json(&json!({ "name": "Nope", "description": "none" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_industry_returns_refreshed_names() {
    let server = make_server().await;

    let response = server
        .patch("/companies/ibm/add-industry")
        .json(&json!({ "ind_code": "acct" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["company"]["code"], "ibm");
    assert_eq!(body["company"]["name"], "IBM");

    let mut industries: Vec<&str> = body["company"]["industries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i.as_str().unwrap())
        .collect();
    industries.sort_unstable();
    assert_eq!(industries, vec!["Accounting", "Technology"]);
}

#[tokio::test]
async fn add_same_industry_twice_is_400() {
    let server = make_server().await;

    server
        .patch("/companies/ibm/add-industry")
        .json(&json!({ "ind_code": "acct" }))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .patch("/companies/ibm/add-industry")
        .json(&json!({ "ind_code": "acct" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "The industry has already been added to this company."
    );
}

#[tokio::test]
async fn add_unknown_industry_is_404() {
    let server = make_server().await;

    let response = server
        .patch("/companies/ibm/add-industry")
        .json(&json!({ "ind_code": "mining" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Could not find industry");
}

#[tokio::test]
async fn add_industry_to_unknown_company_is_404() {
    let server = make_server().await;

    let response = server
        .patch("/companies/nope/add-industry")
        .json(&json!({ "ind_code": "tech" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Could not find company");
}

#[tokio::test]
async fn delete_company_removes_it_and_its_invoices() {
    let server = make_server().await;

    let response = server.delete("/companies/ibm").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

    let companies: Value = server.get("/companies").await.json();
    assert_eq!(companies, json!({ "companies": [] }));

    let invoices: Value = server.get("/invoices").await.json();
    assert_eq!(invoices, json!({ "invoices": [] }));
}

#[tokio::test]
async fn delete_unknown_company_is_404_and_changes_nothing() {
    let server = make_server().await;
    let before: Value = server.get("/companies").await.json();

    server
        .delete("/companies/INVALID_CODE")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let after: Value = server.get("/companies").await.json();
    assert_eq!(before, after);
}

#[tokio::test]
async fn put_without_body_on_unknown_company_is_404() {
    let server = make_server().await;

    let response = server.put("/companies/INVALID_CODE").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "Can't find record with primary key INVALID_CODE"
    );
}

#[tokio::test]
async fn put_without_body_on_known_company_is_400() {
    let server = make_server().await;

    server
        .put("/companies/ibm")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let fetched: Value = server.get("/companies/ibm").await.json();
    assert_eq!(fetched["company"]["name"], "IBM");
}

#[tokio::test]
async fn non_json_body_is_415_with_error_envelope() {
    let server = make_server().await;

    let response = server.post("/companies").text("code=acme").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 415);
}

#[tokio::test]
async fn create_company_transliterates_accented_codes() {
    let server = make_server().await;

    let response = server
        .post("/companies")
        .json(&json!({ "code": "Café Noir", "name": "Café Noir", "description": null }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["company"]["code"], "cafe-noir");

    server
        .get("/companies/cafe-noir")
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn create_company_with_unsluggable_code_is_400() {
    let server = make_server().await;

    let response = server
        .post("/companies")
        .json(&json!({ "code": "!!", "name": "Bang", "description": null }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let companies: Value = server.get("/companies").await.json();
    assert_eq!(companies["companies"].as_array().unwrap().len(), 1);
}
