//! Repository implementations for catalog entities.

pub mod sql;
pub mod table;

pub use sql::SqlRepository;
pub use table::Table;
