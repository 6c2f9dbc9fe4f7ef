//! Fixed demonstration rows, inserted at startup
//!
//! Each table is seeded in its own transaction and reported on its own, so
//! a failure in one table never hides the outcome of the others.

use sqlx::{Connection, PgConnection};

use super::schema::Table;
use super::DbError;

#[derive(Debug, Clone, Copy)]
pub struct CustomerSeed {
    pub id: i32,
    pub name: &'static str,
    pub phone: i64,
    pub address: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OrderedDrugSeed {
    pub order_id: i32,
    pub batch_number: i32,
    pub drug_name: &'static str,
    pub ordered_quantity: i32,
    pub price: &'static str,
    pub customer_id: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct EmployeeSeed {
    pub id: i32,
    pub name: &'static str,
    pub role: &'static str,
    pub salary: &'static str,
    pub phone_number: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct MedicineSeed {
    pub drug_name: &'static str,
    pub batch_number: i32,
    pub medicine_type: &'static str,
    pub manufacturer: &'static str,
    pub stock_quantity: i32,
    /// ISO-8601 date
    pub expiry_date: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BillSeed {
    pub order_id: i32,
    pub customer_ssn: i32,
    pub total_amount: &'static str,
    pub customer_payment: &'static str,
}

pub const CUSTOMERS: &[CustomerSeed] = &[
    CustomerSeed { id: 1, name: "John", phone: 1234567890, address: "123 Main St" },
    CustomerSeed { id: 2, name: "Jane", phone: 9876543210, address: "456 Elm St" },
    CustomerSeed { id: 3, name: "Alice", phone: 1112223333, address: "789 Oak St" },
    CustomerSeed { id: 4, name: "Bob", phone: 2223334444, address: "101 Pine St" },
    CustomerSeed { id: 5, name: "Emily", phone: 3334445555, address: "202 Cedar St" },
];

pub const ORDERED_DRUGS: &[OrderedDrugSeed] = &[
    OrderedDrugSeed { order_id: 100, batch_number: 1, drug_name: "Drug A", ordered_quantity: 5, price: "25.00", customer_id: 1 },
    OrderedDrugSeed { order_id: 101, batch_number: 2, drug_name: "Drug B", ordered_quantity: 10, price: "50.00", customer_id: 1 },
    OrderedDrugSeed { order_id: 102, batch_number: 3, drug_name: "Drug C", ordered_quantity: 5, price: "37.50", customer_id: 2 },
    OrderedDrugSeed { order_id: 103, batch_number: 4, drug_name: "Drug D", ordered_quantity: 15, price: "225.00", customer_id: 2 },
    OrderedDrugSeed { order_id: 104, batch_number: 5, drug_name: "Drug E", ordered_quantity: 10, price: "250.00", customer_id: 2 },
];

pub const EMPLOYEES: &[EmployeeSeed] = &[
    EmployeeSeed { id: 1001, name: "Alice", role: "Pharmacist", salary: "55000.00", phone_number: 1234567890 },
    EmployeeSeed { id: 1002, name: "Bob", role: "Pharmacy Technician", salary: "45000.00", phone_number: 9876543210 },
    EmployeeSeed { id: 1003, name: "Charlie", role: "Pharmacist", salary: "60000.00", phone_number: 5556667777 },
];

pub const MEDICINES: &[MedicineSeed] = &[
    MedicineSeed { drug_name: "Drug A", batch_number: 1, medicine_type: "Tablet", manufacturer: "Manufacturer A", stock_quantity: 100, expiry_date: "2024-12-31", price: "5.00" },
    MedicineSeed { drug_name: "Drug B", batch_number: 2, medicine_type: "Capsule", manufacturer: "Manufacturer B", stock_quantity: 150, expiry_date: "2023-10-15", price: "7.50" },
    MedicineSeed { drug_name: "Drug C", batch_number: 3, medicine_type: "Syrup", manufacturer: "Manufacturer C", stock_quantity: 200, expiry_date: "2025-06-30", price: "10.00" },
];

pub const BILLS: &[BillSeed] = &[
    BillSeed { order_id: 10001, customer_ssn: 123456789, total_amount: "100.00", customer_payment: "80.00" },
    BillSeed { order_id: 10002, customer_ssn: 987654321, total_amount: "75.00", customer_payment: "60.00" },
    BillSeed { order_id: 10003, customer_ssn: 111111111, total_amount: "120.00", customer_payment: "100.00" },
];

/// Number of rows seeded into `table`.
pub fn seed_count(table: Table) -> usize {
    match table {
        Table::Customer => CUSTOMERS.len(),
        Table::OrderedDrugs => ORDERED_DRUGS.len(),
        Table::Employee => EMPLOYEES.len(),
        Table::Medicine => MEDICINES.len(),
        Table::Bill => BILLS.len(),
    }
}

/// Result of seeding one table
#[derive(Debug)]
pub struct TableOutcome {
    pub table: Table,
    /// Rows inserted, or why the table's transaction was rolled back
    pub result: Result<u64, DbError>,
}

/// Per-table seed results, in insertion order
#[derive(Debug, Default)]
pub struct SeedReport {
    pub outcomes: Vec<TableOutcome>,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &TableOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn inserted(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}

/// Insert the fixed rows into every table, Customer before Ordered Drugs.
pub async fn load(conn: &mut PgConnection) -> SeedReport {
    let mut report = SeedReport::default();

    for table in Table::CREATE_ORDER {
        let result = seed_table(conn, table).await;
        match &result {
            Ok(rows) => tracing::info!(table = %table, rows, "seeded table"),
            Err(e) => tracing::error!(table = %table, error = %e, "seeding table failed"),
        }
        report.outcomes.push(TableOutcome { table, result });
    }

    report
}

/// Seed a single table inside its own transaction.
pub async fn seed_table(conn: &mut PgConnection, table: Table) -> Result<u64, DbError> {
    let mut tx = conn.begin().await?;

    let rows = match table {
        Table::Customer => insert_customers(&mut tx).await?,
        Table::OrderedDrugs => insert_ordered_drugs(&mut tx).await?,
        Table::Employee => insert_employees(&mut tx).await?,
        Table::Medicine => insert_medicines(&mut tx).await?,
        Table::Bill => insert_bills(&mut tx).await?,
    };

    tx.commit().await?;
    Ok(rows)
}

async fn insert_customers(conn: &mut PgConnection) -> Result<u64, DbError> {
    let mut rows = 0;
    for c in CUSTOMERS {
        rows += sqlx::query(
            r#"INSERT INTO "Customer" ("id", "Name", "Phone", "address") VALUES ($1, $2, $3, $4)"#,
        )
        .bind(c.id)
        .bind(c.name)
        .bind(c.phone)
        .bind(c.address)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(rows)
}

async fn insert_ordered_drugs(conn: &mut PgConnection) -> Result<u64, DbError> {
    let mut rows = 0;
    for d in ORDERED_DRUGS {
        rows += insert_ordered_drug(conn, d).await?;
    }
    Ok(rows)
}

/// Insert one "Ordered Drugs" row. The database rejects a `customer_id`
/// that does not exist in "Customer".
pub async fn insert_ordered_drug(
    conn: &mut PgConnection,
    d: &OrderedDrugSeed,
) -> Result<u64, DbError> {
    let done = sqlx::query(
        r#"
        INSERT INTO "Ordered Drugs"
            ("Order ID", "Batch Number", "Drug Name", "Ordered Quantity", "Price", "customerID")
        VALUES ($1, $2, $3, $4, $5::numeric, $6)
        "#,
    )
    .bind(d.order_id)
    .bind(d.batch_number)
    .bind(d.drug_name)
    .bind(d.ordered_quantity)
    .bind(d.price)
    .bind(d.customer_id)
    .execute(&mut *conn)
    .await?;

    Ok(done.rows_affected())
}

async fn insert_employees(conn: &mut PgConnection) -> Result<u64, DbError> {
    let mut rows = 0;
    for e in EMPLOYEES {
        rows += sqlx::query(
            r#"
            INSERT INTO "Employee" ("ID", "Name", "Role", "Salary", "Phone Number")
            VALUES ($1, $2, $3, $4::numeric, $5)
            "#,
        )
        .bind(e.id)
        .bind(e.name)
        .bind(e.role)
        .bind(e.salary)
        .bind(e.phone_number)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(rows)
}

async fn insert_medicines(conn: &mut PgConnection) -> Result<u64, DbError> {
    let mut rows = 0;
    for m in MEDICINES {
        rows += sqlx::query(
            r#"
            INSERT INTO "Medicine"
                ("Drug Name", "Batch Number", "MedicineType", "Manufacturer",
                 "Stock Quantity", "Expiry Date", "Price")
            VALUES ($1, $2, $3, $4, $5, $6::date, $7::numeric)
            "#,
        )
        .bind(m.drug_name)
        .bind(m.batch_number)
        .bind(m.medicine_type)
        .bind(m.manufacturer)
        .bind(m.stock_quantity)
        .bind(m.expiry_date)
        .bind(m.price)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(rows)
}

async fn insert_bills(conn: &mut PgConnection) -> Result<u64, DbError> {
    let mut rows = 0;
    for b in BILLS {
        rows += sqlx::query(
            r#"
            INSERT INTO "Bill" ("Order ID", "CustomerSSN", "Total Amount", "Customer Payment")
            VALUES ($1, $2, $3::numeric, $4::numeric)
            "#,
        )
        .bind(b.order_id)
        .bind(b.customer_ssn)
        .bind(b.total_amount)
        .bind(b.customer_payment)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_counts_per_table() {
        let counts = Table::CREATE_ORDER.map(seed_count);
        assert_eq!(counts, [5, 5, 3, 3, 3]);
    }

    #[test]
    fn ordered_drugs_reference_seeded_customers() {
        let ids: HashSet<i32> = CUSTOMERS.iter().map(|c| c.id).collect();
        assert!(ORDERED_DRUGS.iter().all(|d| ids.contains(&d.customer_id)));
    }

    #[test]
    fn customer_phones_are_unique() {
        let phones: HashSet<i64> = CUSTOMERS.iter().map(|c| c.phone).collect();
        assert_eq!(phones.len(), CUSTOMERS.len());
    }

    #[test]
    fn primary_keys_are_unique() {
        let medicine: HashSet<_> = MEDICINES.iter().map(|m| (m.drug_name, m.batch_number)).collect();
        assert_eq!(medicine.len(), MEDICINES.len());

        let ordered: HashSet<_> = ORDERED_DRUGS
            .iter()
            .map(|d| (d.order_id, d.drug_name, d.batch_number))
            .collect();
        assert_eq!(ordered.len(), ORDERED_DRUGS.len());

        let bills: HashSet<_> = BILLS.iter().map(|b| (b.order_id, b.customer_ssn)).collect();
        assert_eq!(bills.len(), BILLS.len());
    }

    #[test]
    fn addresses_fit_column_width() {
        assert!(CUSTOMERS.iter().all(|c| c.address.len() <= 20));
    }

    #[test]
    fn medicine_dates_are_iso() {
        for m in MEDICINES {
            assert!(
                chrono::NaiveDate::parse_from_str(m.expiry_date, "%Y-%m-%d").is_ok(),
                "{}",
                m.expiry_date
            );
        }
    }

    #[test]
    fn report_tracks_failures() {
        let report = SeedReport {
            outcomes: vec![
                TableOutcome { table: Table::Customer, result: Ok(5) },
                TableOutcome {
                    table: Table::OrderedDrugs,
                    result: Err(DbError::from(sqlx::Error::PoolTimedOut)),
                },
                TableOutcome { table: Table::Employee, result: Ok(3) },
            ],
        };

        assert!(!report.is_success());
        assert_eq!(report.inserted(), 8);
        let failed: Vec<Table> = report.failures().map(|o| o.table).collect();
        assert_eq!(failed, vec![Table::OrderedDrugs]);
    }
}
