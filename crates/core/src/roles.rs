//! Well-known profile role constants.
//!
//! These must match the CHECK constraint on `profiles.profile_type` in the
//! schema. Staff (elevated) status is a flag on the user row, not a role.

pub const ROLE_BUSINESS: &str = "business";
pub const ROLE_CUSTOMER: &str = "customer";

/// All valid profile roles.
pub const VALID_ROLES: &[&str] = &[ROLE_BUSINESS, ROLE_CUSTOMER];

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid profile type '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}
