//! Anomaly alert message bodies.

use chrono::{DateTime, Utc};

/// Body of the alert sent when a rotation arrives from an IP address other
/// than the one bound at issuance.
#[must_use]
pub fn new_ip_alert(new_ip: &str, at: DateTime<Utc>) -> Vec<u8> {
    format!(
        "A sign-in to your account from a new IP address was detected.\nTime: {} (UTC)\nIP address: {}",
        at.format("%Y-%m-%d %H:%M:%S"),
        new_ip
    )
    .into_bytes()
}
