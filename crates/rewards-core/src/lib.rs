//! # rewards-core: Pure Business Logic for Customer Rewards
//!
//! This crate is the **heart** of the rewards service. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Customer Rewards Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rewards-api (axum HTTP server)                  │   │
//! │  │     POST /api/customers      GET /api/customers/{id}/rewards    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ rewards-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  points   │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │  tiers    │  │   rules   │  │   │
//! │  │   │Transaction│  │ (decimal) │  │           │  │ aggregate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rewards-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Transaction, RewardQuery, ...)
//! - [`money`] - Money type over exact decimals (no floating point!)
//! - [`points`] - Tiered reward points rule
//! - [`aggregate`] - Monthly grouping of points
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rewards_core::money::Money;
//! use rewards_core::points::calculate_points;
//!
//! let amount: Money = "120.00".parse().unwrap();
//! assert_eq!(calculate_points(amount), 90);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregate::aggregate;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::calculate_points;
pub use types::*;
