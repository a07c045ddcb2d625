//! Form binding for product pages.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use catalog_entity::Product;

use crate::controllers::ModelState;

/// Raw `application/x-www-form-urlencoded` product submission.
///
/// Every field arrives as text so that unparseable input becomes a model
/// error instead of a rejected request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category_id: String,
}

impl ProductForm {
    /// Take the id from the route when the form does not carry one.
    pub fn with_route_id(mut self, id: i32) -> Self {
        if self.id.trim().is_empty() {
            self.id = id.to_string();
        }
        self
    }

    /// Bind the form to a product and validate it.
    pub fn bind(self) -> (Product, ModelState) {
        let mut state = ModelState::new();

        let product = Product {
            id: parse_or(&self.id, "id", 0, &mut state),
            name: self.name.trim().to_string(),
            price: parse_or(&self.price, "price", Decimal::ZERO, &mut state),
            stock: parse_or(&self.stock, "stock", 0, &mut state),
            color: non_empty(&self.color),
            category_id: non_empty(&self.category_id)
                .map(|v| parse_or(&v, "category_id", 0, &mut state)),
        };

        if self.price.trim().is_empty() {
            state.add_model_error("price", "The Price field is required.");
        }

        state.validate(&product);

        (product, state)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_or<T: FromStr>(value: &str, field: &str, default: T, state: &mut ModelState) -> T {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            let message = format!("The value '{trimmed}' is not valid for {field}.");
            state.add_model_error(field, message);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            id: "3".to_string(),
            name: " Blue Pencil ".to_string(),
            price: "200.50".to_string(),
            stock: "100".to_string(),
            color: "".to_string(),
            category_id: "1".to_string(),
        }
    }

    #[test]
    fn test_bind_valid_form() {
        let (product, state) = form().bind();
        assert!(state.is_valid(), "{}", state.summary());
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Blue Pencil");
        assert_eq!(product.price, Decimal::from_str("200.50").expect("decimal"));
        assert_eq!(product.stock, 100);
        assert_eq!(product.color, None);
        assert_eq!(product.category_id, Some(1));
    }

    #[test]
    fn test_unparseable_numbers_become_model_errors() {
        let mut f = form();
        f.price = "cheap".to_string();
        f.stock = "lots".to_string();
        let (_, state) = f.bind();
        assert_eq!(state.errors_for("price").len(), 1);
        assert_eq!(state.errors_for("stock").len(), 1);
    }

    #[test]
    fn test_route_id_fills_missing_id_only() {
        let mut f = form();
        f.id.clear();
        let (product, state) = f.with_route_id(7).bind();
        assert!(state.is_valid(), "{}", state.summary());
        assert_eq!(product.id, 7);

        let (product, _) = form().with_route_id(7).bind();
        assert_eq!(product.id, 3);
    }

    #[test]
    fn test_missing_price_and_name_are_invalid() {
        let (_, state) = ProductForm::default().bind();
        assert!(!state.errors_for("price").is_empty());
        assert!(!state.errors_for("name").is_empty());
    }
}
