//! Product pages.

use catalog_entity::Product;

use super::{escape, layout};
use crate::controllers::{ModelState, ViewResult};

/// Render a product page selected by a controller action.
///
/// `Create` and `Edit` render the form, re-filled with the submitted
/// model and its errors when the submission was rejected.
pub fn render(view: &ViewResult<Product>) -> String {
    match (view.name, view.model.as_ref()) {
        ("Details", Some(product)) => details(product),
        ("Delete", Some(product)) => delete(product),
        ("Edit", product) => form("Edit", product, &view.model_state),
        (_, product) => form("Create", product, &view.model_state),
    }
}

/// The product list.
pub fn index(products: &[Product]) -> String {
    let rows: String = products
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{name}</td><td>{price}</td><td>{stock}</td><td>{color}</td><td>{category}</td>\
                 <td><a href=\"/products/edit/{id}\">Edit</a> | \
                 <a href=\"/products/details/{id}\">Details</a> | \
                 <a href=\"/products/delete/{id}\">Delete</a></td></tr>\n",
                id = p.id,
                name = escape(&p.name),
                price = p.price,
                stock = p.stock,
                color = escape(p.color.as_deref().unwrap_or("")),
                category = category_text(p),
            )
        })
        .collect();

    let body = format!(
        "<p><a href=\"/products/create\">Create New</a></p>\n<table>\n\
         <thead><tr><th>Name</th><th>Price</th><th>Stock</th><th>Color</th><th>Category</th><th></th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>"
    );
    layout("Index", &body)
}

fn details(product: &Product) -> String {
    let body = format!(
        "{fields}<p><a href=\"/products/edit/{id}\">Edit</a> | <a href=\"/products\">Back to List</a></p>",
        fields = field_list(product),
        id = product.id,
    );
    layout("Details", &body)
}

fn delete(product: &Product) -> String {
    let body = format!(
        "<h3>Are you sure you want to delete this?</h3>\n{fields}\
         <form method=\"post\" action=\"/products/delete/{id}\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <button type=\"submit\">Delete</button> | <a href=\"/products\">Back to List</a>\n</form>",
        fields = field_list(product),
        id = product.id,
    );
    layout("Delete", &body)
}

fn form(title: &'static str, product: Option<&Product>, state: &ModelState) -> String {
    let action = match (title, product) {
        ("Edit", Some(p)) => format!("/products/edit/{}", p.id),
        _ => "/products/create".to_string(),
    };

    let value = |f: fn(&Product) -> String| product.map(f).unwrap_or_default();
    let inputs = [
        ("name", "Name", value(|p| p.name.clone())),
        ("price", "Price", value(|p| p.price.to_string())),
        ("stock", "Stock", value(|p| p.stock.to_string())),
        ("color", "Color", value(|p| p.color.clone().unwrap_or_default())),
        ("category_id", "Category", value(category_text)),
    ];

    let fields: String = inputs
        .iter()
        .map(|(field, label, value)| {
            let errors: String = state
                .errors_for(field)
                .iter()
                .map(|e| format!("<span class=\"field-error\">{}</span>", escape(e)))
                .collect();
            format!(
                "<div><label for=\"{field}\">{label}</label>\
                 <input id=\"{field}\" name=\"{field}\" value=\"{value}\">{errors}</div>\n",
                value = escape(value),
            )
        })
        .collect();

    let summary: String = if state.is_valid() {
        String::new()
    } else {
        let items: String = state
            .errors()
            .iter()
            .filter(|(field, _)| !inputs.iter().any(|(name, _, _)| field.as_str() == *name))
            .flat_map(|(_, messages)| messages.iter())
            .map(|m| format!("<li>{}</li>", escape(m)))
            .collect();
        format!("<ul class=\"validation-summary\">{items}</ul>\n")
    };

    let id = product.map(|p| p.id).unwrap_or_default();
    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n{summary}\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n{fields}\
         <button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/products\">Back to List</a></p>"
    );
    layout(title, &body)
}

fn field_list(product: &Product) -> String {
    format!(
        "<dl>\n<dt>Name</dt><dd>{name}</dd>\n<dt>Price</dt><dd>{price}</dd>\n\
         <dt>Stock</dt><dd>{stock}</dd>\n<dt>Color</dt><dd>{color}</dd>\n\
         <dt>Category</dt><dd>{category}</dd>\n</dl>\n",
        name = escape(&product.name),
        price = product.price,
        stock = product.stock,
        color = escape(product.color.as_deref().unwrap_or("")),
        category = category_text(product),
    )
}

fn category_text(product: &Product) -> String {
    product
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default()
}
