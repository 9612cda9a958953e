//! Payment Model

use serde::{Deserialize, Serialize};

/// Payment attached to an order
///
/// Created together with (or shortly after) the order. Superseded if the
/// user restarts payment; invalidated once the order reaches a terminal
/// state or the expiry countdown hits zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Payment method code (e.g. "qris", "bca_va")
    pub method: String,
    /// QR payload string, for QR-based methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_string: Option<String>,
    /// Virtual account number, for bank-transfer methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub va_number: Option<String>,
    /// Amount in currency unit
    pub amount: f64,
    /// Fee in currency unit
    pub fee: f64,
    /// Total payable in currency unit (amount + fee)
    pub total: f64,
    /// Payment's own status string as reported by the gateway
    pub status: String,
    /// Absolute expiry time (Unix millis)
    pub expired_at: i64,
}

impl Payment {
    /// Seconds left until expiry at `now_millis`, rounded up so a partial
    /// second still counts as time left, clamped at zero.
    pub fn remaining_seconds(&self, now_millis: i64) -> i64 {
        ((self.expired_at - now_millis).max(0) + 999) / 1000
    }

    /// The rendering artifact for this payment: QR payload preferred,
    /// else the virtual-account number.
    pub fn artifact(&self) -> Option<&str> {
        self.qr_string.as_deref().or(self.va_number.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(expired_at: i64) -> Payment {
        Payment {
            method: "qris".to_string(),
            qr_string: Some("00020101021226...".to_string()),
            va_number: None,
            amount: 25000.0,
            fee: 500.0,
            total: 25500.0,
            status: "unpaid".to_string(),
            expired_at,
        }
    }

    #[test]
    fn remaining_seconds_counts_down() {
        let p = payment(90_000);
        assert_eq!(p.remaining_seconds(0), 90);
        assert_eq!(p.remaining_seconds(60_000), 30);
    }

    #[test]
    fn remaining_seconds_rounds_partial_seconds_up() {
        let p = payment(10_000);
        assert_eq!(p.remaining_seconds(9_500), 1);
        assert_eq!(p.remaining_seconds(9_001), 1);
    }

    #[test]
    fn remaining_seconds_clamps_at_zero() {
        let p = payment(10_000);
        assert_eq!(p.remaining_seconds(10_000), 0);
        assert_eq!(p.remaining_seconds(99_000), 0);
    }

    #[test]
    fn artifact_prefers_qr() {
        let mut p = payment(0);
        assert!(p.artifact().unwrap().starts_with("000201"));
        p.qr_string = None;
        p.va_number = Some("8808123456".to_string());
        assert_eq!(p.artifact(), Some("8808123456"));
        p.va_number = None;
        assert_eq!(p.artifact(), None);
    }
}
