//! DTOs for the health check endpoint.

use serde::Serialize;

/// Service health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component check results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Single component status: `ok` or `error` plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    pub message: String,
}
