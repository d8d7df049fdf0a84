//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Atomic Creation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                create_with_transactions                                 │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    INSERT INTO customers        → customer id (last_insert_rowid)      │
//! │    INSERT INTO transactions × N → transaction ids                      │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any failure before COMMIT drops the transaction → ROLLBACK.           │
//! │  Either the customer and all its transactions exist, or none do.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::repository::transaction::TransactionRepository;
use rewards_core::{Customer, NewCustomer, Transaction};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
}

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a customer and all of its transactions in one database
    /// transaction, returning the stored customer with generated ids.
    ///
    /// Transactions come back in input order.
    pub async fn create_with_transactions(&self, new_customer: &NewCustomer) -> DbResult<Customer> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let customer_id = sqlx::query("INSERT INTO customers (name) VALUES (?1)")
            .bind(&new_customer.name)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        debug!(customer_id, "Inserted customer row");

        let mut transactions = Vec::with_capacity(new_customer.transactions.len());
        for item in &new_customer.transactions {
            let id = sqlx::query(
                "INSERT INTO transactions (customer_id, amount, date) VALUES (?1, ?2, ?3)",
            )
            .bind(customer_id)
            .bind(item.amount.amount().to_string())
            .bind(item.date)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            transactions.push(Transaction {
                id,
                customer_id,
                amount: item.amount,
                date: item.date,
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(
            customer_id,
            transaction_count = transactions.len(),
            "Customer created"
        );

        Ok(Customer {
            id: customer_id,
            name: new_customer.name.clone(),
            transactions,
        })
    }

    /// Gets a customer by id, with all of its transactions ordered by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, name FROM customers WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let transactions = TransactionRepository::new(self.pool.clone())
            .list_for_customer(id)
            .await?;

        Ok(Some(Customer {
            id: row.id,
            name: row.name,
            transactions,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
