//! Pure domain logic for the gigdesk marketplace.
//!
//! No I/O and no async: shared types, role constants, validation of offer
//! tiers / order statuses / review ratings, and the composable
//! access-control predicates that gate every mutation. Both the persistence
//! layer and the API crate depend on this crate; it depends on nothing of
//! theirs.

pub mod error;
pub mod offers;
pub mod orders;
pub mod pagination;
pub mod policy;
pub mod reviews;
pub mod roles;
pub mod types;
