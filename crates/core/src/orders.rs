//! Order status constants and validation.
//!
//! An order is a frozen snapshot of one offer tier; after creation only the
//! status field is mutable.

/// Initial status of every new order.
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid order statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_IN_PROGRESS, STATUS_COMPLETED, STATUS_CANCELLED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_statuses_accepted() {
        assert!(validate_status("in_progress").is_ok());
        assert!(validate_status("completed").is_ok());
        assert!(validate_status("cancelled").is_ok());
    }

    #[test]
    fn unknown_status_rejected() {
        let result = validate_status("shipped");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid status"));
    }

    #[test]
    fn empty_status_rejected() {
        assert!(validate_status("").is_err());
    }

    #[test]
    fn case_sensitive() {
        assert!(validate_status("Completed").is_err());
        assert!(validate_status("IN_PROGRESS").is_err());
    }
}
