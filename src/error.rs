//! Probe error types.
//!
//! [`PreflightError`] is the central error type for the probe. As far as
//! the startup routine is concerned there is one failure kind, a
//! connection that could not be established; the variants only record
//! which step of producing a usable handle went wrong.

/// Failure reported by the MySQL connection provider.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    /// Opening the connection failed: malformed URL, unresolvable or
    /// unreachable host, refused TCP connection, or rejected credentials.
    #[error("failed to connect to MySQL: {0}")]
    Connect(#[source] sqlx::Error),

    /// The connection opened but the liveness probe did not complete.
    #[error("MySQL liveness probe failed: {0}")]
    Ping(#[source] sqlx::Error),
}
