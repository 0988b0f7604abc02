//! Startup orchestration: the connect/report/release sequence.
//!
//! [`run`] is the whole program. It asks the provider for a handle,
//! reports the result on the given sink, releases the handle, and says
//! which way it went. Fail fast: the first failure is final, there are
//! no retries and no alternate paths.

use std::io::Write;

use crate::db::{ConnectionHandle, ConnectionProvider};

/// Line written to the sink once connectivity is verified.
pub const READY_MESSAGE: &str = "MySQL connection OK";

/// Which way the startup sequence went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// A verified handle was acquired, confirmed, and released again.
    Connected,
    /// The provider reported a failure and it was written to the sink.
    Failed,
}

/// Runs the startup sequence against `provider`, reporting on `out`.
///
/// On success the confirmation line is written and the handle is released
/// before returning; on failure the error's display form is written and
/// nothing else happens. Writes to `out` are best-effort: a broken sink
/// cannot change the outcome or leave the handle open.
pub async fn run<P, W>(provider: &P, out: &mut W) -> Outcome
where
    P: ConnectionProvider,
    W: Write,
{
    match provider.connect().await {
        Ok(handle) => {
            let _ = writeln!(out, "{READY_MESSAGE}");
            tracing::info!("database connection verified");
            handle.close().await;
            tracing::debug!("database handle released");
            Outcome::Connected
        }
        Err(err) => {
            let _ = writeln!(out, "{err}");
            tracing::error!(error = %err, "database connection failed");
            Outcome::Failed
        }
    }
}
