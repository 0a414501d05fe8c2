pub mod auth;
pub mod contacts;
pub mod favorites;
pub mod projects;
pub mod search;
pub mod skills;
pub mod upload;
