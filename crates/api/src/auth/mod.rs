//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and verification of the admin secret.
//! - [`jwt`] -- HS256 token issuance and validation.

pub mod jwt;
pub mod password;
