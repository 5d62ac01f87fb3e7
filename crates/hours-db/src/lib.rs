//! # hours-db
//!
//! Record store layer implementing the hours-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx (`Pg*Repository`) with schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers that coerce the loosely typed text columns
//! - In-memory repositories (`Memory*Repository`) with the same semantics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hours_db::{create_pool, run_migrations, DatabaseConfig, PgClinicalLogRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let logs = PgClinicalLogRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryClinicalLogRepository, MemoryGoalRepository, MemorySuperviseeRepository,
    MemorySupervisionLogRepository, MemoryUserProfileRepository,
};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgClinicalLogRepository, PgGoalRepository, PgSuperviseeRepository,
    PgSupervisionLogRepository, PgUserProfileRepository,
};
