//! # Domain Types
//!
//! Core domain types used throughout the rewards service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Request side (all fields optional)   Validated (all fields required)  │
//! │  ───────────────────────────────────  ─────────────────────────────    │
//! │  CustomerDraft     ── validate ──►    NewCustomer                      │
//! │  TransactionDraft  ── validate ──►    NewTransaction                   │
//! │                                                                         │
//! │  Persisted                             Query / result                  │
//! │  ───────────────────────────────────  ─────────────────────────────    │
//! │  Customer { id, name, transactions }  RewardQuery                      │
//! │  Transaction { id, customer_id, .. }  RewardBreakdown, MonthlyReward   │
//! │                                        RewardSummary                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! A `Customer` owns its `Vec<Transaction>`. A `Transaction` only carries the
//! owning customer's id; there is no pointer back to the customer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::money::Money;

// =============================================================================
// Request Drafts
// =============================================================================

/// A customer as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub customer_name: Option<String>,

    #[serde(rename = "transaction")]
    pub transactions: Option<Vec<TransactionDraft>>,
}

/// A purchase as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TransactionDraft {
    /// JSON number or decimal string; every fraction digit is kept.
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Money>,
    /// `yyyy-MM-dd`
    pub date: Option<NaiveDate>,
}

// =============================================================================
// Validated Input
// =============================================================================

/// A customer that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    /// Never empty.
    pub transactions: Vec<NewTransaction>,
}

/// A purchase that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTransaction {
    /// Always positive.
    pub amount: Money,
    pub date: NaiveDate,
}

// =============================================================================
// Persisted Entities
// =============================================================================

/// A stored customer together with every transaction it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[serde(rename = "customerId")]
    pub id: i64,

    #[serde(rename = "customerName")]
    pub name: String,

    #[serde(rename = "transaction")]
    pub transactions: Vec<Transaction>,
}

/// A stored purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    #[serde(rename = "transactionId")]
    pub id: i64,

    /// Owning customer. Lookup only; not part of the JSON representation.
    #[serde(skip_serializing, default)]
    pub customer_id: i64,

    #[schema(value_type = f64)]
    pub amount: Money,
    pub date: NaiveDate,
}

// =============================================================================
// Reward Query
// =============================================================================

/// A validated request for a customer's rewards over an inclusive window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardQuery {
    /// Always positive.
    pub customer_id: i64,
    pub start_date: NaiveDate,
    /// Never before `start_date`.
    pub end_date: NaiveDate,
}

// =============================================================================
// Reward Results
// =============================================================================

/// Points earned in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyReward {
    /// Upper-case English month name, e.g. `"APRIL"`.
    pub month: String,
    pub points: u64,
}

/// Output of the aggregator: months in first-seen order plus their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardBreakdown {
    pub months: Vec<MonthlyReward>,
    pub total_points: u64,
}

/// Everything returned for a reward query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RewardSummary {
    #[serde(rename = "Customer Details")]
    pub customer: Customer,

    #[serde(rename = "Rewards Breakdown")]
    pub rewards_by_month: Vec<MonthlyReward>,

    #[serde(rename = "Total Rewards")]
    pub total_points: u64,
}

impl RewardSummary {
    /// Combines a customer snapshot with its aggregated breakdown.
    pub fn new(customer: Customer, breakdown: RewardBreakdown) -> Self {
        RewardSummary {
            customer,
            rewards_by_month: breakdown.months,
            total_points: breakdown.total_points,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
