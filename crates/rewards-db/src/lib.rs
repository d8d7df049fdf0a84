//! # rewards-db: Database Layer for Customer Rewards
//!
//! This crate provides database access for the rewards service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Customer Rewards Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (GET /api/customers/{id}/rewards)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RewardsService ──► dyn RewardStore                                    │
//! │       │                                                                 │
//! │  ┌────▼────────────────────────────────────────────────────────────┐   │
//! │  │                     rewards-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌───────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations   │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)   │  │   │
//! │  │   │               │    │ CustomerRepo   │   │               │  │   │
//! │  │   │ SqlitePool    │◄───│ TransactionRepo│   │ 001_init.sql  │  │   │
//! │  │   └───────────────┘    └────────────────┘   └───────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (DATABASE_PATH)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer and transaction repositories
//! - [`store`] - The `RewardStore` persistence gateway trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewards_db::{Database, DbConfig, RewardStore};
//!
//! let db = Database::new(DbConfig::new("rewards.db")).await?;
//! let customer = db.create_customer_with_transactions(new_customer).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::RewardStore;

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::transaction::TransactionRepository;
