//! Schema lifecycle: drop and create the five pharmacy tables
//!
//! Identifiers are double-quoted everywhere so the original mixed-case,
//! space-separated column names survive PostgreSQL case folding and come
//! back unchanged as JSON keys.

use std::fmt;

use sqlx::PgConnection;

use super::DbError;

/// The five pharmacy tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customer,
    OrderedDrugs,
    Employee,
    Medicine,
    Bill,
}

impl Table {
    /// Referenced tables before dependents.
    pub const CREATE_ORDER: [Table; 5] = [
        Table::Customer,
        Table::OrderedDrugs,
        Table::Employee,
        Table::Medicine,
        Table::Bill,
    ];

    /// Dependents before referenced tables, so foreign keys never block a drop.
    pub const DROP_ORDER: [Table; 5] = [
        Table::Bill,
        Table::Medicine,
        Table::Employee,
        Table::OrderedDrugs,
        Table::Customer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Customer => "Customer",
            Table::OrderedDrugs => "Ordered Drugs",
            Table::Employee => "Employee",
            Table::Medicine => "Medicine",
            Table::Bill => "Bill",
        }
    }

    /// Name as a quoted SQL identifier.
    pub fn ident(self) -> String {
        format!("\"{}\"", self.name())
    }

    pub fn drop_sql(self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.ident())
    }

    pub fn create_sql(self) -> &'static str {
        match self {
            Table::Customer => CREATE_CUSTOMER,
            Table::OrderedDrugs => CREATE_ORDERED_DRUGS,
            Table::Employee => CREATE_EMPLOYEE,
            Table::Medicine => CREATE_MEDICINE,
            Table::Bill => CREATE_BILL,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const CREATE_CUSTOMER: &str = r#"
CREATE TABLE "Customer" (
    "id"        INT GENERATED BY DEFAULT AS IDENTITY,
    "Name"      VARCHAR(255) NOT NULL,
    "Phone"     BIGINT NOT NULL UNIQUE,
    "address"   VARCHAR(20),
    PRIMARY KEY ("id")
)
"#;

const CREATE_ORDERED_DRUGS: &str = r#"
CREATE TABLE "Ordered Drugs" (
    "Order ID"          INT GENERATED BY DEFAULT AS IDENTITY,
    "Batch Number"      INT NOT NULL,
    "Drug Name"         VARCHAR(255) NOT NULL,
    "Ordered Quantity"  INT NOT NULL,
    "Price"             NUMERIC(10, 2) NOT NULL,
    "customerID"        INT,
    CONSTRAINT fk_customer FOREIGN KEY ("customerID") REFERENCES "Customer" ("id"),
    PRIMARY KEY ("Order ID", "Drug Name", "Batch Number")
)
"#;

const CREATE_EMPLOYEE: &str = r#"
CREATE TABLE "Employee" (
    "ID"            INT GENERATED BY DEFAULT AS IDENTITY,
    "Name"          VARCHAR(255) NOT NULL,
    "Role"          VARCHAR(255) NOT NULL,
    "Salary"        NUMERIC(10, 2) NOT NULL,
    "Phone Number"  BIGINT NOT NULL,
    PRIMARY KEY ("ID")
)
"#;

const CREATE_MEDICINE: &str = r#"
CREATE TABLE "Medicine" (
    "Drug Name"       VARCHAR(255) NOT NULL,
    "Batch Number"    INT NOT NULL,
    "MedicineType"    VARCHAR(255) NOT NULL,
    "Manufacturer"    VARCHAR(255) NOT NULL,
    "Stock Quantity"  INT NOT NULL,
    "Expiry Date"     DATE NOT NULL,
    "Price"           NUMERIC(10, 2) NOT NULL,
    PRIMARY KEY ("Drug Name", "Batch Number")
)
"#;

// "CustomerSSN" is a plain integer with no reference to "Customer". Whether
// it was meant as a foreign key is unresolved, so none is invented here.
const CREATE_BILL: &str = r#"
CREATE TABLE "Bill" (
    "Order ID"          INT NOT NULL,
    "CustomerSSN"       INT NOT NULL,
    "Total Amount"      NUMERIC(10, 2) NOT NULL,
    "Customer Payment"  NUMERIC(10, 2) NOT NULL,
    PRIMARY KEY ("Order ID", "CustomerSSN")
)
"#;

/// Drop all five tables if present.
///
/// Each statement runs in autocommit mode; a missing table is not an error.
pub async fn reset(conn: &mut PgConnection) -> Result<(), DbError> {
    for table in Table::DROP_ORDER {
        sqlx::query(&table.drop_sql()).execute(&mut *conn).await?;
        tracing::debug!(table = %table, "dropped table");
    }

    tracing::info!("Existing tables dropped");
    Ok(())
}

/// Create all five tables. Stops at the first failing statement; tables
/// created before it are left in place.
pub async fn build(conn: &mut PgConnection) -> Result<(), DbError> {
    for table in Table::CREATE_ORDER {
        sqlx::query(table.create_sql())
            .execute(&mut *conn)
            .await
            .inspect_err(|e| tracing::error!(table = %table, error = %e, "create table failed"))?;
        tracing::debug!(table = %table, "created table");
    }

    tracing::info!("Tables created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Table], table: Table) -> usize {
        order.iter().position(|t| *t == table).unwrap()
    }

    #[test]
    fn drop_order_matches_dependencies() {
        assert_eq!(
            Table::DROP_ORDER.map(Table::name),
            ["Bill", "Medicine", "Employee", "Ordered Drugs", "Customer"]
        );
        assert!(
            position(&Table::DROP_ORDER, Table::OrderedDrugs)
                < position(&Table::DROP_ORDER, Table::Customer)
        );
    }

    #[test]
    fn create_order_puts_customer_first() {
        assert!(
            position(&Table::CREATE_ORDER, Table::Customer)
                < position(&Table::CREATE_ORDER, Table::OrderedDrugs)
        );
    }

    #[test]
    fn drop_sql_quotes_identifier() {
        assert_eq!(
            Table::OrderedDrugs.drop_sql(),
            r#"DROP TABLE IF EXISTS "Ordered Drugs""#
        );
    }

    #[test]
    fn only_ordered_drugs_has_a_foreign_key() {
        for table in Table::CREATE_ORDER {
            let has_fk = table.create_sql().contains("FOREIGN KEY");
            assert_eq!(has_fk, table == Table::OrderedDrugs, "{table}");
        }
        assert!(Table::OrderedDrugs
            .create_sql()
            .contains(r#"REFERENCES "Customer" ("id")"#));
    }

    #[test]
    fn every_table_declares_a_primary_key() {
        for table in Table::CREATE_ORDER {
            assert!(table.create_sql().contains("PRIMARY KEY"), "{table}");
            assert!(table.create_sql().contains(&table.ident()), "{table}");
        }
    }
}
