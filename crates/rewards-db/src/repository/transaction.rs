//! # Transaction Repository
//!
//! Read-side queries over stored purchase transactions.
//!
//! Dates are stored as `yyyy-MM-dd` text, so `BETWEEN` compares them in
//! calendar order and both bounds are inclusive.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rewards_core::{Money, Transaction};

/// Raw `transactions` row. The amount is exact decimal text.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    customer_id: i64,
    amount: String,
    date: NaiveDate,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = DbError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let amount = row.amount.parse::<Money>().map_err(|e| {
            DbError::Internal(format!("transaction {} has a bad amount: {}", row.id, e))
        })?;
        Ok(Transaction {
            id: row.id,
            customer_id: row.customer_id,
            amount,
            date: row.date,
        })
    }
}

fn into_transactions(rows: Vec<TransactionRow>) -> DbResult<Vec<Transaction>> {
    rows.into_iter().map(Transaction::try_from).collect()
}

/// Repository for transaction queries.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Returns the customer's transactions dated within `[start, end]`,
    /// ordered by transaction id.
    ///
    /// An unknown customer yields an empty list, not an error.
    pub async fn find_in_range(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<Transaction>> {
        debug!(customer_id, %start, %end, "Querying transactions in range");

        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, customer_id, amount, date
            FROM transactions
            WHERE customer_id = ?1
              AND date BETWEEN ?2 AND ?3
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Range query returned transactions");
        into_transactions(rows)
    }

    /// Returns every transaction of a customer, ordered by id.
    pub async fn list_for_customer(&self, customer_id: i64) -> DbResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, customer_id, amount, date
            FROM transactions
            WHERE customer_id = ?1
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        into_transactions(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
