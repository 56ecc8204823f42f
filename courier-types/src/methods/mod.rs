//! Request structs, one per remote method, grouped by API area.
//!
//! Every struct here implements [`Method`](crate::Method): construct it,
//! optionally chain the builder-style setters for optional fields, and hand
//! it to the dispatcher. Validation runs before anything is encoded.

pub mod gifts;
pub mod inline;
pub mod payments;
pub mod stickers;
