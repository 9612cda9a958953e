//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand metadata from `GET /api/brands/{name}`
///
/// Consumed as-is for the order form page; nothing here is computed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandDetail {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Descriptive copy shown on the brand page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Promotional popup, shown once per visit when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<BrandPopup>,
}

/// Promotional popup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandPopup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
