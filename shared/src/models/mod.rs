//! Domain models
//!
//! Serde DTOs mirroring the storefront API wire format. Enum values travel
//! in `snake_case` (the remote service's vocabulary).

pub mod brand;
pub mod order;
pub mod payment;

pub use brand::{BrandDetail, BrandPopup};
pub use order::{
    CreateOrderRequest, Order, OrderHistoryItem, OrderStatus, OrderStatusResponse,
};
pub use payment::Payment;
