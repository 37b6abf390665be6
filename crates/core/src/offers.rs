//! Offer catalog constants and validation.
//!
//! An offer carries exactly three pricing tiers, one per label. The tier-set
//! check runs before any row is written so a rejected payload leaves nothing
//! behind.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an offer title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of an offer description.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Tier labels. Every offer has exactly these three, each exactly once.
pub const TIER_BASIC: &str = "basic";
pub const TIER_STANDARD: &str = "standard";
pub const TIER_PREMIUM: &str = "premium";

/// All valid tier labels.
pub const VALID_TIER_LABELS: &[&str] = &[TIER_BASIC, TIER_STANDARD, TIER_PREMIUM];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a tier label is one of the allowed values.
pub fn validate_tier_label(label: &str) -> Result<(), String> {
    if VALID_TIER_LABELS.contains(&label) {
        Ok(())
    } else {
        Err(format!(
            "Invalid offer_type '{label}'. Must be one of: {}",
            VALID_TIER_LABELS.join(", ")
        ))
    }
}

/// Validate the tier labels of an offer creation payload.
///
/// Each payload entry must carry a label, every label must be valid, no
/// label may repeat, and the full set {basic, standard, premium} must be
/// present.
pub fn validate_tier_set(labels: &[Option<&str>]) -> Result<(), String> {
    let mut seen: Vec<&str> = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.ok_or_else(|| {
            "Each offer detail must include an 'offer_type' field".to_string()
        })?;
        validate_tier_label(label)?;
        if seen.contains(&label) {
            return Err(format!("Duplicate offer_type '{label}'"));
        }
        seen.push(label);
    }

    for required in VALID_TIER_LABELS {
        if !seen.contains(required) {
            return Err(
                "Offers must include 'basic', 'standard', and 'premium' offer types".to_string(),
            );
        }
    }

    Ok(())
}

/// Validate the tier labels of an offer update payload.
///
/// Updates may only touch tiers that already exist: every supplied payload
/// must carry a valid label matching one of `existing`. A label that would
/// create a new tier fails instead of silently inserting one.
pub fn validate_tier_labels_known(
    labels: &[Option<&str>],
    existing: &[&str],
) -> Result<(), String> {
    for label in labels {
        let label = label.ok_or_else(|| {
            "Each offer detail must include an 'offer_type' field".to_string()
        })?;
        validate_tier_label(label)?;
        if !existing.contains(&label) {
            return Err(format!(
                "Offer has no '{label}' tier; tiers cannot be added via update"
            ));
        }
    }
    Ok(())
}

/// Validate an offer title: non-empty, within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Offer title cannot be empty".to_string());
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Offer title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an offer description length.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Offer description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate tier economics: price and delivery must not be negative.
pub fn validate_tier_fields(price: f64, delivery_time_in_days: i32) -> Result<(), String> {
    if price < 0.0 {
        return Err("Tier price cannot be negative".to_string());
    }
    if delivery_time_in_days < 0 {
        return Err("Tier delivery time cannot be negative".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
