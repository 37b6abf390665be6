//! Composable access-control predicates.
//!
//! Every mutation is gated by a combination of three base predicates over
//! (caller, target): ownership, role, and the staff override. Handlers call
//! the per-action compositions; the base predicates stay public so new
//! actions can compose their own rule.

use crate::roles::{ROLE_BUSINESS, ROLE_CUSTOMER};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Base predicates
// ---------------------------------------------------------------------------

/// Caller identifier equals the resource's owner/author identifier.
pub fn is_owner(caller_id: DbId, owner_id: DbId) -> bool {
    caller_id == owner_id
}

/// Caller's profile role equals the required value.
pub fn has_role(caller_role: &str, required: &str) -> bool {
    caller_role == required
}

/// Administrative callers bypass ownership and role checks.
pub fn is_elevated(staff: bool) -> bool {
    staff
}

// ---------------------------------------------------------------------------
// Per-action compositions
// ---------------------------------------------------------------------------

/// Offer update: owner with the business role, or staff.
pub fn can_modify_offer(caller_id: DbId, caller_role: &str, staff: bool, owner_id: DbId) -> bool {
    (is_owner(caller_id, owner_id) && has_role(caller_role, ROLE_BUSINESS)) || is_elevated(staff)
}

/// Offer delete: never a customer; otherwise owner or staff.
pub fn can_delete_offer(caller_id: DbId, caller_role: &str, staff: bool, owner_id: DbId) -> bool {
    !has_role(caller_role, ROLE_CUSTOMER) && (is_owner(caller_id, owner_id) || is_elevated(staff))
}

/// Order status update / delete: the order's seller (business role), or
/// staff. Ownership-scoped rather than any-business.
pub fn can_manage_order(caller_id: DbId, caller_role: &str, staff: bool, seller_id: DbId) -> bool {
    (is_owner(caller_id, seller_id) && has_role(caller_role, ROLE_BUSINESS)) || is_elevated(staff)
}

/// Review update / delete: the original author, or staff.
pub fn can_modify_review(caller_id: DbId, staff: bool, author_id: DbId) -> bool {
    is_owner(caller_id, author_id) || is_elevated(staff)
}

/// Profile update: the profile's owner, or staff.
pub fn can_modify_profile(caller_id: DbId, staff: bool, owner_id: DbId) -> bool {
    is_owner(caller_id, owner_id) || is_elevated(staff)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_matches_only_itself() {
        assert!(is_owner(7, 7));
        assert!(!is_owner(7, 8));
    }

    #[test]
    fn role_check_exact() {
        assert!(has_role("business", ROLE_BUSINESS));
        assert!(!has_role("customer", ROLE_BUSINESS));
        assert!(!has_role("Business", ROLE_BUSINESS));
    }

    // -- offers --------------------------------------------------------------

    #[test]
    fn owner_business_modifies_offer() {
        assert!(can_modify_offer(1, "business", false, 1));
    }

    #[test]
    fn non_owner_business_cannot_modify_offer() {
        assert!(!can_modify_offer(2, "business", false, 1));
    }

    #[test]
    fn owner_customer_cannot_modify_offer() {
        // Role is checked in addition to ownership.
        assert!(!can_modify_offer(1, "customer", false, 1));
    }

    #[test]
    fn staff_modifies_any_offer() {
        assert!(can_modify_offer(99, "customer", true, 1));
    }

    #[test]
    fn customer_never_deletes_offer() {
        // A customer who somehow owns an offer still cannot delete it.
        assert!(!can_delete_offer(1, "customer", false, 1));
    }

    #[test]
    fn staff_customer_cannot_delete_offer() {
        // The customer exclusion applies even to staff.
        assert!(!can_delete_offer(99, "customer", true, 1));
    }

    #[test]
    fn owner_business_deletes_offer() {
        assert!(can_delete_offer(1, "business", false, 1));
    }

    #[test]
    fn staff_business_deletes_any_offer() {
        assert!(can_delete_offer(99, "business", true, 1));
    }

    // -- orders --------------------------------------------------------------

    #[test]
    fn seller_manages_own_order() {
        assert!(can_manage_order(5, "business", false, 5));
    }

    #[test]
    fn other_business_cannot_manage_order() {
        // Ownership-scoped: being a business is not enough.
        assert!(!can_manage_order(6, "business", false, 5));
    }

    #[test]
    fn buyer_cannot_manage_order() {
        assert!(!can_manage_order(3, "customer", false, 5));
    }

    #[test]
    fn staff_manages_any_order() {
        assert!(can_manage_order(99, "customer", true, 5));
    }

    // -- reviews -------------------------------------------------------------

    #[test]
    fn author_or_staff_modifies_review() {
        assert!(can_modify_review(4, false, 4));
        assert!(!can_modify_review(5, false, 4));
        assert!(can_modify_review(5, true, 4));
    }

    // -- profiles ------------------------------------------------------------

    #[test]
    fn owner_or_staff_modifies_profile() {
        assert!(can_modify_profile(2, false, 2));
        assert!(!can_modify_profile(3, false, 2));
        assert!(can_modify_profile(3, true, 2));
    }
}
