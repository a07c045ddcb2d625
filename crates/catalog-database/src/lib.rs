//! # catalog-database
//!
//! SQLite data context, schema migrations, and the generic SQL
//! repository used for every catalog entity.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DataContext;
pub use repositories::{SqlRepository, Table};
