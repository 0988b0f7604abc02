//! # mysql-preflight
//!
//! Startup connectivity probe for MySQL databases: open a connection,
//! verify it answers, report the result, release the connection, exit.
//!
//! Deployments run the probe ahead of services that assume the database
//! is reachable, so a bad host, credential, or firewall rule fails loudly
//! before anything else starts. The probe makes exactly one attempt;
//! there is no retry logic and no pooling beyond the single verified
//! connection.
//!
//! ## Architecture
//!
//! ```text
//! main (bin)
//!     │
//!     ├── DbConfig (config)          environment → connection settings
//!     │
//!     ├── startup::run               connect → report → release
//!     │       │
//!     │       └── ConnectionProvider (db)
//!     │               └── MySqlProvider → sqlx::MySqlPool
//!     │
//!     └── PreflightError (error)
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod startup;
