//! Store connectivity checks
//!
//! The only place a store failure surfaces as a failure instead of
//! degrading to a cache miss.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rcc_application::ports::providers::cache::CacheProvider;
use serde::{Deserialize, Serialize};

use crate::constants::STORE_HEALTH_CHECK_NAME;
use crate::logging::log_health_check;

/// Whether a checked component answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Answered
    Up,
    /// Did not answer
    Down,
}

impl HealthStatus {
    /// `true` for [`HealthStatus::Up`]
    pub fn is_healthy(self) -> bool {
        self == Self::Up
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Component name
    pub name: String,
    /// Up or down
    pub status: HealthStatus,
    /// When the check finished
    pub timestamp: DateTime<Utc>,
    /// Round trip, saturating at `u64::MAX`
    pub response_time_ms: u64,
    /// Failure description when down
    pub error: Option<String>,
    /// Component-specific extras
    pub details: Option<serde_json::Value>,
}

impl HealthCheck {
    fn with_status(name: impl Into<String>, status: HealthStatus, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status,
            timestamp: Utc::now(),
            response_time_ms: 0,
            error,
            details: None,
        }
    }

    /// Component answered
    pub fn healthy(name: impl Into<String>) -> Self {
        Self::with_status(name, HealthStatus::Up, None)
    }

    /// Component did not answer
    pub fn failed(name: impl Into<String>, error: Option<String>) -> Self {
        Self::with_status(name, HealthStatus::Down, error)
    }

    /// Record how long the check took
    #[must_use]
    pub fn with_response_time(self, elapsed: Duration) -> Self {
        Self {
            response_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            ..self
        }
    }

    /// Attach extras
    #[must_use]
    pub fn with_details(self, details: serde_json::Value) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }
}

/// Something whose liveness can be checked
#[async_trait]
pub trait HealthChecker: Send + Sync {
    /// Check once
    async fn check_health(&self) -> HealthCheck;
}

/// Pings the result store
#[derive(Debug, Clone)]
pub struct StoreHealthChecker {
    store: Arc<dyn CacheProvider>,
}

impl StoreHealthChecker {
    /// Check `store`
    pub fn new(store: Arc<dyn CacheProvider>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HealthChecker for StoreHealthChecker {
    async fn check_health(&self) -> HealthCheck {
        let started = Instant::now();
        let outcome = self.store.ping().await;

        let check = match outcome {
            Ok(()) => HealthCheck::healthy(STORE_HEALTH_CHECK_NAME),
            Err(e) => HealthCheck::failed(STORE_HEALTH_CHECK_NAME, Some(e.to_string())),
        }
        .with_response_time(started.elapsed())
        .with_details(serde_json::json!({ "provider": self.store.provider_name() }));

        log_health_check(&check.name, check.status.is_healthy(), check.error.as_deref());
        check
    }
}
