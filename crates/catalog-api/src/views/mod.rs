//! Server-rendered HTML pages.
//!
//! Views are plain functions from a model to an HTML string. Every piece
//! of interpolated text goes through [`escape`].

pub mod products;

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the site layout.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Catalog</title>\n</head>\n<body>\n\
         <nav><a href=\"/products\">Products</a></nav>\n<main>\n<h1>{title}</h1>\n{body}\n</main>\n\
         </body>\n</html>\n",
        title = escape(title),
    )
}

/// Page served for not-found results.
pub fn not_found() -> String {
    layout(
        "Not Found",
        "<p>The requested product could not be found.</p>\n<p><a href=\"/products\">Back to List</a></p>",
    )
}
