//! # Rewards Service
//!
//! Request flow between the HTTP handlers, the pure core and the store.
//!
//! ```text
//! create:   CustomerDraft ─► validate_customer ─► store.create_customer_with_transactions
//!
//! rewards:  (id, start, end) ─► validate_reward_request
//!                                   │
//!                                   ▼
//!                          store.find_transactions ── empty ─► NoTransactionsFound
//!                                   │
//!                                   ▼
//!                               aggregate
//!                                   │
//!                                   ▼
//!                          store.find_customer_by_id ── none ─► CustomerNotFound
//!                                   │
//!                                   ▼
//!                             RewardSummary
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use rewards_core::validation::{validate_customer, validate_reward_request};
use rewards_core::{aggregate, CoreError, Customer, CustomerDraft, RewardSummary};
use rewards_db::{DbError, RewardStore};

/// Errors surfaced by [`RewardsService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected input or missing data.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed; passed through untouched.
    #[error(transparent)]
    Store(#[from] DbError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Customer creation and reward calculation over a [`RewardStore`].
#[derive(Clone)]
pub struct RewardsService {
    store: Arc<dyn RewardStore>,
}

impl RewardsService {
    pub fn new(store: Arc<dyn RewardStore>) -> Self {
        RewardsService { store }
    }

    /// Validates and persists a customer with its transactions.
    ///
    /// Nothing is stored if any part of the draft is invalid.
    pub async fn create_customer(&self, draft: Option<CustomerDraft>) -> ServiceResult<Customer> {
        let new_customer = validate_customer(draft.as_ref()).map_err(|e| {
            warn!(error = %e, "Customer rejected");
            CoreError::from(e)
        })?;

        info!(
            name = %new_customer.name,
            transaction_count = new_customer.transactions.len(),
            "Creating customer"
        );

        let customer = self
            .store
            .create_customer_with_transactions(new_customer)
            .await?;

        info!(customer_id = customer.id, "Customer stored");
        Ok(customer)
    }

    /// Computes the reward summary of a customer over an inclusive date range.
    ///
    /// Dates are `yyyy-MM-dd` text as received from the client.
    pub async fn calculate_rewards(
        &self,
        customer_id: Option<i64>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ServiceResult<RewardSummary> {
        let query = validate_reward_request(customer_id, start_date, end_date).map_err(|e| {
            warn!(error = %e, "Reward query rejected");
            CoreError::from(e)
        })?;

        info!(
            customer_id = query.customer_id,
            start = %query.start_date,
            end = %query.end_date,
            "Calculating rewards"
        );

        let transactions = self
            .store
            .find_transactions(query.customer_id, query.start_date, query.end_date)
            .await?;

        if transactions.is_empty() {
            return Err(CoreError::NoTransactionsFound(query.customer_id).into());
        }

        let breakdown = aggregate(&transactions);

        let customer = self
            .store
            .find_customer_by_id(query.customer_id)
            .await?
            .ok_or(CoreError::CustomerNotFound(query.customer_id))?;

        info!(
            customer_id = customer.id,
            months = breakdown.months.len(),
            total_points = breakdown.total_points,
            "Rewards calculated"
        );

        Ok(RewardSummary::new(customer, breakdown))
    }

    /// Whether the backing store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
