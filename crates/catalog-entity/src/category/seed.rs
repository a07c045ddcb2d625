//! Categories inserted when the schema is created.
//!
//! Must match the seed rows in the initial migration.

use super::model::Category;

/// The seeded categories, in identity order.
pub fn seeded() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Pencil".to_string(),
        },
        Category {
            id: 2,
            name: "Notebook".to_string(),
        },
    ]
}
