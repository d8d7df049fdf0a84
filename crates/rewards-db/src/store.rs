//! # Reward Store
//!
//! The persistence gateway the HTTP service talks to.
//!
//! The service holds an `Arc<dyn RewardStore>`, so tests can swap the SQLite
//! [`Database`] for an in-memory fake or a store that always fails.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DbResult;
use crate::pool::Database;
use rewards_core::{Customer, NewCustomer, Transaction};

/// Storage operations needed to create customers and compute rewards.
#[async_trait]
pub trait RewardStore: Send + Sync {
    /// Persists a customer and its transactions atomically.
    async fn create_customer_with_transactions(&self, customer: NewCustomer)
        -> DbResult<Customer>;

    /// Transactions of `customer_id` dated within `[start, end]`, ordered by id.
    async fn find_transactions(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<Transaction>>;

    /// The customer with all of its transactions, if it exists.
    async fn find_customer_by_id(&self, customer_id: i64) -> DbResult<Option<Customer>>;

    /// Whether the backing store can currently serve queries.
    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl RewardStore for Database {
    async fn create_customer_with_transactions(
        &self,
        customer: NewCustomer,
    ) -> DbResult<Customer> {
        self.customers().create_with_transactions(&customer).await
    }

    async fn find_transactions(
        &self,
        customer_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<Transaction>> {
        self.transactions()
            .find_in_range(customer_id, start, end)
            .await
    }

    async fn find_customer_by_id(&self, customer_id: i64) -> DbResult<Option<Customer>> {
        self.customers().get_by_id(customer_id).await
    }

    async fn health_check(&self) -> bool {
        Database::health_check(self).await
    }
}
