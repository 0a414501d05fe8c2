//! Domain types and pure logic for the portfolio backend.
//!
//! Nothing in this crate performs I/O; the storage and HTTP layers depend on
//! it, never the other way round.

pub mod contact;
pub mod error;
pub mod favorite;
pub mod media;
pub mod project;
pub mod related;
pub mod search;
pub mod skill;
pub mod slug;
pub mod types;
