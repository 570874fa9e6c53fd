//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return [`DbError`].

pub mod account_repo;
pub mod entry_repo;
pub mod portion_repo;
pub mod product_repo;

pub use account_repo::AccountRepo;
pub use entry_repo::EntryRepo;
pub use portion_repo::PortionRepo;
pub use product_repo::ProductRepo;
