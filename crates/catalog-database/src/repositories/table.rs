//! Table mappings for persisted entities.

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Entity;
use catalog_entity::product::price;
use catalog_entity::{Category, Product};

/// A query with positional SQLite arguments.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Describes how an entity maps onto a table with an integer `id`
/// primary key.
pub trait Table: Entity + for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;

    /// Every column except `id`, in bind order.
    const COLUMNS: &'static [&'static str];

    /// Bind this entity's values for [`Self::COLUMNS`], in order.
    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> AppResult<SqliteQuery<'q>>;
}

impl Table for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["name", "price_cents", "stock", "color", "category_id"];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> AppResult<SqliteQuery<'q>> {
        let cents = price::to_cents(self.price).ok_or_else(|| {
            AppError::validation(format!(
                "Price {} exceeds decimal({}, {})",
                self.price,
                price::PRECISION,
                price::SCALE
            ))
        })?;

        Ok(query
            .bind(self.name.as_str())
            .bind(cents)
            .bind(self.stock)
            .bind(self.color.as_deref())
            .bind(self.category_id))
    }
}

impl Table for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> AppResult<SqliteQuery<'q>> {
        Ok(query.bind(self.name.as_str()))
    }
}
