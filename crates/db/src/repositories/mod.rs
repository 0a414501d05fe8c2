//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods that participate in request-scoped transactions accept any
//! `PgExecutor` (a `&PgPool` or `&mut *tx`); the rest take `&PgPool`.

pub mod contact_repo;
pub mod favorite_repo;
pub mod project_repo;
pub mod skill_repo;

pub use contact_repo::ContactRepo;
pub use favorite_repo::FavoriteRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
