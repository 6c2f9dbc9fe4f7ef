//! Medicine repository - the stocked drugs listing

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::Medicine;

/// Medicine repository
pub struct MedicineRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MedicineRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All Medicine rows, ordered by primary key.
    ///
    /// An empty table is an empty Vec, not an error.
    pub async fn list(&self) -> Result<Vec<Medicine>, DbError> {
        let rows = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT
                "Drug Name",
                "Batch Number",
                "MedicineType",
                "Manufacturer",
                "Stock Quantity",
                "Expiry Date",
                "Price"::TEXT AS "Price"
            FROM "Medicine"
            ORDER BY "Drug Name", "Batch Number"
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
