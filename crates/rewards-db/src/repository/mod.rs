//! # Repository Module
//!
//! Database repository implementations for customers and transactions.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  RewardStore (store.rs)                                                │
//! │       │                                                                 │
//! │       │  db.customers().create_with_transactions(&new_customer)        │
//! │       │  db.transactions().find_in_range(id, start, end)               │
//! │       ▼                                                                 │
//! │  CustomerRepository            TransactionRepository                   │
//! │  ├── create_with_transactions  ├── find_in_range                       │
//! │  └── get_by_id ──────────────► └── list_for_customer                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`] - Customer creation and lookup
//! - [`TransactionRepository`] - Date-range transaction queries

pub mod customer;
pub mod transaction;

pub use customer::CustomerRepository;
pub use transaction::TransactionRepository;
