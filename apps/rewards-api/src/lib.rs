//! # Rewards API
//!
//! HTTP server that stores customers with their purchases and reports the
//! loyalty points they earned.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rewards API Layers                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  service       │  │  rewards-core              ││
//! │  │                │  │                │  │                            ││
//! │  │ • POST create  │─►│ RewardsService │─►│ • validation               ││
//! │  │ • GET rewards  │  │                │  │ • aggregate / points       ││
//! │  │ • GET health   │  │                │  └────────────────────────────┘│
//! │  └────────────────┘  └───────┬────────┘                                │
//! │          │                   │           ┌────────────────────────────┐│
//! │          ▼                   └──────────►│  rewards-db (RewardStore)  ││
//! │  ┌────────────────┐                      │  SQLite                    ││
//! │  │  error         │                      └────────────────────────────┘│
//! │  │  ApiError JSON │                                                    │
//! │  └────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_HOST` - Bind interface (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP port (default: 8080)
//! - `DATABASE_PATH` - SQLite file, or `:memory:` (default: rewards.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `LOG_LEVEL` - Log filter used when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorCode};
pub use routes::{router, ApiDoc, AppState};
pub use service::{RewardsService, ServiceError};
