//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use catalog_core::traits::Entity;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    #[serde(default)]
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl Entity for Category {
    const NAME: &'static str = "category";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
