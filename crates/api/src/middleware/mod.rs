//! Request guards.
//!
//! - [`auth::require_admin`] -- rejects requests without a valid admin token.
//! - [`auth::AdminIdentity`] -- extractor for the identity it binds.

pub mod auth;
