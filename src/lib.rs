//! Pustaka
//!
//! Pustaka is the storefront core of a small bookstore: catalog and stock
//! management, cart/checkout aggregation, shipment tracking lookup and order
//! history, persisted through a JSON key-value store.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod format;
pub mod history;
pub mod notify;
pub mod prelude;
pub mod session;
pub mod stock;
pub mod store;
pub mod tracking;
pub mod utils;
pub mod validation;
