//! End-to-end tests against the full router over an in-memory store.

mod helpers;

mod category_test;
mod health_test;
mod product_api_test;
mod products_page_test;
