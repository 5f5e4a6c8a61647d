//! Prometheus metrics for the session token service.

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

/// Sessions issued counter.
pub static SESSIONS_ISSUED: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "session_token_service_sessions_issued_total",
        "Total number of session credential pairs issued"
    )
    .expect("Failed to register sessions_issued metric")
});

/// Rotation outcomes counter.
pub static ROTATIONS: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "session_token_service_rotations_total",
        "Total number of rotation attempts",
        &["status"]
    )
    .expect("Failed to register rotations metric")
});

/// Anomaly alerts dispatched counter.
pub static ANOMALY_ALERTS: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "session_token_service_anomaly_alerts_total",
        "Total number of new-IP anomaly alerts dispatched"
    )
    .expect("Failed to register anomaly_alerts metric")
});
