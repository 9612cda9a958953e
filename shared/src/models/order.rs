//! Order Model

use serde::{Deserialize, Serialize};

use super::payment::Payment;

/// Order status as reported by the remote order service
///
/// The client never writes a status; it only re-reads it. Once a terminal
/// status has been displayed it must never be replaced by a non-terminal one
/// (stale-response guard in the tracker).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    WaitingPayment,
    Paid,
    Processing,
    Success,
    Failed,
    Expired,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Terminal statuses: no further transition is expected or accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Success | Self::Failed | Self::Expired | Self::Cancelled | Self::Refunded
        )
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Opaque order id (server-assigned)
    pub id: String,
    /// Human-reference id shown on receipts and the tracking screen
    pub ref_id: String,
    /// Selected product SKU
    pub product_code: String,
    /// Composed customer number (see `profile::compose_customer_number`)
    pub customer_no: String,
    /// Price in currency unit
    pub price: f64,
    pub status: OrderStatus,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

/// Create order payload for `POST /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub product_code: String,
    pub customer_no: String,
    /// Payment method code selected on the form
    pub payment_method: String,
    /// Contact phone, used later by `GET /api/orders/track`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Response of `GET /api/orders/{id}/status`, polled by the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatus,
    /// Display label for the status (server-localized)
    pub status_label: String,
    /// Present once a payment instrument has been issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

/// One row of `GET /api/orders/track?phone=...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryItem {
    pub ref_id: String,
    pub product_name: String,
    /// Price in currency unit
    pub price: f64,
    pub status: OrderStatus,
    /// Creation time (Unix millis)
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        for status in [
            OrderStatus::Success,
            OrderStatus::Failed,
            OrderStatus::Expired,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ] {
            assert!(status.is_terminal(), "{status:?} should be terminal");
        }
        for status in [
            OrderStatus::Pending,
            OrderStatus::WaitingPayment,
            OrderStatus::Paid,
            OrderStatus::Processing,
        ] {
            assert!(!status.is_terminal(), "{status:?} should not be terminal");
        }
    }

    #[test]
    fn status_wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::WaitingPayment).unwrap(),
            "\"waiting_payment\""
        );
        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Refunded);
    }

    #[test]
    fn status_response_without_payment() {
        let json = r#"{"status":"pending","status_label":"Menunggu"}"#;
        let resp: OrderStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, OrderStatus::Pending);
        assert!(resp.payment.is_none());
    }
}
