//! Row types returned by the query layer

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One "Medicine" row.
///
/// Field names serialize to the column names, so the JSON object mirrors
/// the table exactly. `price` is the NUMERIC rendered as text ("7.50") to
/// keep both decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Medicine {
    #[serde(rename = "Drug Name")]
    #[sqlx(rename = "Drug Name")]
    pub drug_name: String,

    #[serde(rename = "Batch Number")]
    #[sqlx(rename = "Batch Number")]
    pub batch_number: i32,

    #[serde(rename = "MedicineType")]
    #[sqlx(rename = "MedicineType")]
    pub medicine_type: String,

    #[serde(rename = "Manufacturer")]
    #[sqlx(rename = "Manufacturer")]
    pub manufacturer: String,

    #[serde(rename = "Stock Quantity")]
    #[sqlx(rename = "Stock Quantity")]
    pub stock_quantity: i32,

    #[serde(rename = "Expiry Date")]
    #[sqlx(rename = "Expiry Date")]
    pub expiry_date: NaiveDate,

    #[serde(rename = "Price")]
    #[sqlx(rename = "Price")]
    pub price: String,
}
