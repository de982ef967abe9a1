use serde::{Deserialize, Serialize};

/// Health check response from `/health`.
///
/// Serializes as `{"ok": true}`. The process being able to answer at all is
/// the signal; there is no unhealthy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

impl HealthStatus {
    /// The only status the service ever reports.
    pub const fn alive() -> Self {
        Self { ok: true }
    }
}
