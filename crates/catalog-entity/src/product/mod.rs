//! Product entity.

pub mod model;
pub mod price;

pub use model::Product;
