//! Category entity.

pub mod model;
pub mod seed;

pub use model::Category;
