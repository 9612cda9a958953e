//! Shared types for the top-up storefront
//!
//! Domain types and pure logic used across crates: brand/order/payment
//! models, the brand slug resolver, identifier sanitization, and the
//! per-game input profile registry. No I/O lives here.

pub mod models;
pub mod profile;
pub mod response;
pub mod sanitize;
pub mod slug;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{BrandDetail, Order, OrderStatus, OrderStatusResponse, Payment};
pub use profile::{GameInputProfile, InputError};
pub use response::ApiResponse;
