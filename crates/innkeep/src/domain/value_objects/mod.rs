//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod room_category;

pub use room_category::*;
