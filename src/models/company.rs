// src/models/company.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Row of the listing: only the key and the display name.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct CompanySummary {
    #[schema(example = "ibm")]
    pub code: String,
    #[schema(example = "IBM")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Company {
    #[schema(example = "ibm")]
    pub code: String,

    #[schema(example = "IBM")]
    pub name: String,

    #[schema(example = "Big Blue")]
    pub description: Option<String>,
}

/// A company with the ids of its invoices and the display names of its industries.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,

    #[schema(example = json!([1, 2]))]
    pub invoices: Vec<i32>,

    #[schema(example = json!(["Technology"]))]
    pub industries: Vec<String>,
}

/// Returned after an industry is associated with a company.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CompanyIndustries {
    #[schema(example = "ibm")]
    pub code: String,

    #[schema(example = "IBM")]
    pub name: String,

    #[schema(example = json!(["Technology", "Accounting"]))]
    pub industries: Vec<String>,
}

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCompanyPayload {
    // Normalised to a slug before insert
    #[schema(example = "Acme Co")]
    pub code: String,

    #[schema(example = "Acme")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Maker of everything")]
    pub description: Option<String>,
}

/// The code is taken from the path and never changes.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCompanyPayload {
    #[schema(example = "New Name")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "New description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddIndustryPayload {
    #[schema(example = "acct")]
    pub ind_code: String,
}
