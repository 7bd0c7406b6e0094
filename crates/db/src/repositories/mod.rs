//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod exchange_rate_repo;
pub mod project_repo;

pub use activity_repo::ActivityRepo;
pub use exchange_rate_repo::ExchangeRateRepo;
pub use project_repo::ProjectRepo;
