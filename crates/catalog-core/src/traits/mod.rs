//! Core traits defined in `catalog-core` and implemented by other crates.

pub mod entity;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod repository;

pub use entity::Entity;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRepository;
pub use repository::Repository;
