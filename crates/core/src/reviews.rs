//! Review registry constants and validation.

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Maximum length of a review description.
pub const MAX_REVIEW_LENGTH: usize = 5_000;

/// Validate that a rating lies in the accepted range.
pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        ));
    }
    Ok(())
}

/// Validate a review description length.
pub fn validate_review_description(description: &str) -> Result<(), String> {
    if description.len() > MAX_REVIEW_LENGTH {
        return Err(format!(
            "Review description exceeds maximum length of {MAX_REVIEW_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_in_range_accepted() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn zero_rating_rejected() {
        assert!(validate_rating(0).is_err());
    }

    #[test]
    fn six_rating_rejected() {
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn negative_rating_rejected() {
        assert!(validate_rating(-3).is_err());
    }

    #[test]
    fn oversized_description_rejected() {
        let description = "a".repeat(MAX_REVIEW_LENGTH + 1);
        assert!(validate_review_description(&description).is_err());
    }

    #[test]
    fn description_at_limit_accepted() {
        let description = "a".repeat(MAX_REVIEW_LENGTH);
        assert!(validate_review_description(&description).is_ok());
    }
}
