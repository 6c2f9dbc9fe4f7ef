//! Table-level helpers for reporting row counts

use sqlx::PgPool;

use crate::db::schema::Table;
use crate::db::DbError;

pub struct TableRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TableRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Row count of one table.
    pub async fn count(&self, table: Table) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.ident());
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(self.pool).await?;
        Ok(count)
    }

    /// Row counts of all five tables, in creation order.
    pub async fn counts(&self) -> Result<Vec<(Table, i64)>, DbError> {
        let mut counts = Vec::with_capacity(Table::CREATE_ORDER.len());
        for table in Table::CREATE_ORDER {
            counts.push((table, self.count(table).await?));
        }
        Ok(counts)
    }
}
