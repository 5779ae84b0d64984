// src/models/industry.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Industry {
    #[schema(example = "tech")]
    pub code: String,

    // Display name
    #[schema(example = "Technology")]
    pub industry: String,
}

/// An industry code with the codes of every company associated with it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct IndustryCompanies {
    #[schema(example = "tech")]
    pub code: String,

    #[schema(example = json!(["ibm", "apple"]))]
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIndustryPayload {
    #[schema(example = "Tech")]
    pub code: String,

    #[schema(example = "Technology")]
    pub industry: String,
}
