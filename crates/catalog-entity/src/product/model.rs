//! Product entity model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use validator::Validate;

use catalog_core::traits::Entity;

use super::price;

/// Maximum length of a product name.
pub const NAME_MAX_LEN: u64 = 200;

/// Maximum length of a product color.
pub const COLOR_MAX_LEN: u64 = 50;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Unique product identifier (`0` until persisted).
    #[serde(default)]
    pub id: i32,
    /// Display name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    /// Unit price, `decimal(18, 2)`. Written to JSON as a number.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    #[validate(custom(function = "price::validate_price"))]
    pub price: Decimal,
    /// Units in stock.
    #[serde(default)]
    pub stock: i32,
    /// Optional color label.
    #[serde(default)]
    #[validate(length(max = 50, message = "Color must be at most 50 characters"))]
    pub color: Option<String>,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl Product {
    /// Create a product that has not been persisted yet.
    pub fn new(name: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            stock,
            color: None,
            category_id: None,
        }
    }

    /// Builder-style color setter.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder-style category setter.
    pub fn in_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Builder-style identity setter.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Product {
    const NAME: &'static str = "product";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let cents: i64 = row.try_get("price_cents")?;
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: price::from_cents(cents),
            stock: row.try_get("stock")?,
            color: row.try_get("color")?,
            category_id: row.try_get("category_id")?,
        })
    }
}
