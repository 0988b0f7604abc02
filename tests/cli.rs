//! End-to-end checks against the compiled probe binary.

#![allow(clippy::panic)]

use std::process::Command;

use mysql_preflight::startup::READY_MESSAGE;

/// A `DATABASE_URL` that cannot be parsed fails the probe before any
/// network activity, which keeps this test hermetic.
#[test]
fn malformed_database_url_fails_without_confirmation() {
    let output = Command::new(env!("CARGO_BIN_EXE_mysql-preflight"))
        .env("RUST_LOG", "off")
        .env("DATABASE_URL", "not a connection url")
        .output();
    let Ok(output) = output else {
        panic!("failed to launch the probe binary");
    };

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed to connect to MySQL"));
    assert!(!stdout.contains(READY_MESSAGE));
}
