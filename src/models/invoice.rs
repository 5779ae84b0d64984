// src/models/invoice.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::company::Company;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct InvoiceSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ibm")]
    pub comp_code: String,
}

/// A full invoice row.
///
/// `paid_date` is present exactly when `paid` is true.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Invoice {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "ibm")]
    pub comp_code: String,

    #[schema(value_type = f64, example = 999.0)]
    pub amt: Decimal,

    #[schema(example = false)]
    pub paid: bool,

    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub add_date: NaiveDate,

    #[schema(value_type = Option<String>, format = Date, example = json!(null))]
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    /// Merges a PATCH body into the current row.
    ///
    /// `amt` is replaced when given. `paid` only counts when the request carried an
    /// actual boolean: `true` stamps `paid_date` with `today`, `false` clears it.
    /// Otherwise both `paid` and `paid_date` keep their current values.
    pub fn apply(mut self, changes: &UpdateInvoicePayload, today: NaiveDate) -> Invoice {
        if let Some(amt) = changes.amt {
            self.amt = amt;
        }
        if let Some(paid) = changes.paid {
            self.paid = paid;
            self.paid_date = if paid { Some(today) } else { None };
        }
        self
    }
}

/// Invoice as shown by `GET /invoices/{id}`, with the owning company nested.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InvoiceDetail {
    pub id: i32,

    #[schema(value_type = f64, example = 999.0)]
    pub amt: Decimal,

    pub paid: bool,

    #[schema(value_type = String, format = Date)]
    pub add_date: NaiveDate,

    #[schema(value_type = Option<String>, format = Date)]
    pub paid_date: Option<NaiveDate>,

    pub company: Company,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInvoicePayload {
    #[schema(example = "ibm")]
    pub comp_code: String,

    #[schema(value_type = f64, example = 999.0)]
    pub amt: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateInvoicePayload {
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 5555.0)]
    pub amt: Option<Decimal>,

    // Anything that is not a JSON boolean counts as "not sent"
    #[serde(default, deserialize_with = "explicit_bool")]
    #[schema(example = true)]
    pub paid: Option<bool>,
}

fn explicit_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}
