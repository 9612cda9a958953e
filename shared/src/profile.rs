//! Game input profile registry
//!
//! Per-brand shape of the order form: whether the game needs a secondary
//! zone/server id next to the account id, and the labels/placeholders for
//! the input fields. Static, process-wide, read-only; unknown brands get
//! the universal single-field default. The registry never validates brand
//! existence — that is the slug resolver's concern.

use thiserror::Error;

use crate::sanitize::{sanitize_primary, sanitize_secondary};

/// Resolved input profile for one brand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInputProfile {
    /// Normalized (uppercased, trimmed) brand name used for the lookup
    pub brand: String,
    /// Whether a secondary zone/server id must be collected
    pub requires_zone_id: bool,
    pub primary_label: &'static str,
    pub primary_placeholder: &'static str,
    pub zone_label: Option<&'static str>,
    pub zone_placeholder: Option<&'static str>,
}

/// Static table entry, keyed by normalized brand name
struct ProfileEntry {
    brand: &'static str,
    requires_zone_id: bool,
    primary_label: &'static str,
    primary_placeholder: &'static str,
    zone_label: Option<&'static str>,
    zone_placeholder: Option<&'static str>,
}

const DEFAULT_PRIMARY_LABEL: &str = "User ID";
const DEFAULT_PRIMARY_PLACEHOLDER: &str = "Enter your user ID";

const PROFILES: &[ProfileEntry] = &[
    ProfileEntry {
        brand: "MOBILE LEGENDS",
        requires_zone_id: true,
        primary_label: "User ID",
        primary_placeholder: "Example: 12345678",
        zone_label: Some("Zone ID"),
        zone_placeholder: Some("Example: 1234"),
    },
    ProfileEntry {
        brand: "MOBILE LEGENDS: BANG BANG",
        requires_zone_id: true,
        primary_label: "User ID",
        primary_placeholder: "Example: 12345678",
        zone_label: Some("Zone ID"),
        zone_placeholder: Some("Example: 1234"),
    },
    ProfileEntry {
        brand: "FREE FIRE",
        requires_zone_id: false,
        primary_label: "Player ID",
        primary_placeholder: "Example: 123456789",
        zone_label: None,
        zone_placeholder: None,
    },
    ProfileEntry {
        brand: "PUBG MOBILE",
        requires_zone_id: false,
        primary_label: "Character ID",
        primary_placeholder: "Example: 5123456789",
        zone_label: None,
        zone_placeholder: None,
    },
    ProfileEntry {
        brand: "GENSHIN IMPACT",
        requires_zone_id: true,
        primary_label: "UID",
        primary_placeholder: "Example: 800123456",
        zone_label: Some("Server"),
        zone_placeholder: Some("Example: os_asia"),
    },
    ProfileEntry {
        brand: "HONKAI: STAR RAIL",
        requires_zone_id: true,
        primary_label: "UID",
        primary_placeholder: "Example: 800123456",
        zone_label: Some("Server"),
        zone_placeholder: Some("Example: prod_official_asia"),
    },
];

/// Input-shape validation errors, reported before submission (never mid-poll)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Primary identifier is empty after sanitization
    #[error("Customer ID is required")]
    MissingCustomerId,
    /// The brand's profile requires a zone id but none was supplied
    #[error("{brand} requires a zone ID")]
    MissingZoneId { brand: String },
}

fn normalize(brand: &str) -> String {
    brand.trim().to_uppercase()
}

/// Resolve the input profile for a brand.
///
/// Exact match against the static table after uppercasing and trimming;
/// on miss, the default single-field profile carrying the normalized name.
pub fn resolve_profile(brand: &str) -> GameInputProfile {
    let normalized = normalize(brand);
    match PROFILES.iter().find(|entry| entry.brand == normalized) {
        Some(entry) => GameInputProfile {
            brand: normalized,
            requires_zone_id: entry.requires_zone_id,
            primary_label: entry.primary_label,
            primary_placeholder: entry.primary_placeholder,
            zone_label: entry.zone_label,
            zone_placeholder: entry.zone_placeholder,
        },
        None => GameInputProfile {
            brand: normalized,
            requires_zone_id: false,
            primary_label: DEFAULT_PRIMARY_LABEL,
            primary_placeholder: DEFAULT_PRIMARY_PLACEHOLDER,
            zone_label: None,
            zone_placeholder: None,
        },
    }
}

/// Compose the customer number the fulfillment provider expects.
///
/// Sanitized primary, with the sanitized secondary appended (no separator)
/// only when the brand's profile requires one and a value was supplied.
/// A required-but-missing secondary degrades to the primary alone; callers
/// wanting strict validation run [`ensure_complete`] before submission.
pub fn compose_customer_number(brand: &str, primary: &str, secondary: Option<&str>) -> String {
    let profile = resolve_profile(brand);
    let mut customer_no = sanitize_primary(primary);
    if profile.requires_zone_id {
        if let Some(zone) = secondary {
            customer_no.push_str(&sanitize_secondary(zone));
        }
    }
    customer_no
}

/// Strict pre-submission check for the order form.
///
/// Rejects an empty (post-sanitization) primary id, and a missing or blank
/// zone id when the brand's profile requires one.
pub fn ensure_complete(
    brand: &str,
    primary: &str,
    secondary: Option<&str>,
) -> Result<(), InputError> {
    if sanitize_primary(primary).is_empty() {
        return Err(InputError::MissingCustomerId);
    }
    let profile = resolve_profile(brand);
    if profile.requires_zone_id {
        let zone = secondary.map(sanitize_secondary).unwrap_or_default();
        if zone.is_empty() {
            return Err(InputError::MissingZoneId {
                brand: profile.brand,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let profile = resolve_profile("  mobile legends ");
        assert_eq!(profile.brand, "MOBILE LEGENDS");
        assert!(profile.requires_zone_id);
        assert_eq!(profile.zone_label, Some("Zone ID"));
    }

    #[test]
    fn unknown_brand_gets_default_profile() {
        let profile = resolve_profile("Some Other Game");
        assert_eq!(profile.brand, "SOME OTHER GAME");
        assert!(!profile.requires_zone_id);
        assert_eq!(profile.primary_label, "User ID");
        assert_eq!(profile.zone_label, None);
    }

    #[test]
    fn exactly_one_profile_per_table_brand() {
        for entry in PROFILES {
            let matches = PROFILES.iter().filter(|e| e.brand == entry.brand).count();
            assert_eq!(matches, 1, "duplicate profile for {}", entry.brand);
        }
    }

    #[test]
    fn compose_with_zone() {
        assert_eq!(
            compose_customer_number("MOBILE LEGENDS", " 123 ", Some("(456)")),
            "123456"
        );
    }

    #[test]
    fn compose_without_zone_requirement() {
        assert_eq!(compose_customer_number("SOME OTHER GAME", " 789 ", None), "789");
        // Secondary supplied but the profile does not require one: ignored
        assert_eq!(
            compose_customer_number("FREE FIRE", "789", Some("12")),
            "789"
        );
    }

    #[test]
    fn compose_degrades_when_required_zone_missing() {
        assert_eq!(compose_customer_number("MOBILE LEGENDS", "123", None), "123");
    }

    #[test]
    fn ensure_complete_rejects_missing_zone() {
        assert_eq!(
            ensure_complete("Mobile Legends", "123", None),
            Err(InputError::MissingZoneId {
                brand: "MOBILE LEGENDS".to_string()
            })
        );
        assert_eq!(
            ensure_complete("Mobile Legends", "123", Some(" ( ) ")),
            Err(InputError::MissingZoneId {
                brand: "MOBILE LEGENDS".to_string()
            })
        );
        assert_eq!(ensure_complete("Mobile Legends", "123", Some("456")), Ok(()));
    }

    #[test]
    fn ensure_complete_rejects_blank_primary() {
        assert_eq!(
            ensure_complete("Free Fire", "   ", None),
            Err(InputError::MissingCustomerId)
        );
        assert_eq!(ensure_complete("Free Fire", "789", None), Ok(()));
    }
}
