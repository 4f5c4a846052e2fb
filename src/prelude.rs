//! Pustaka prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::{Book, CATALOG_KEY, Catalog, CatalogError, Upsert},
    checkout::{CheckoutPage, checkout_form},
    fixtures::{Fixture, FixtureError},
    history::{HistoryPage, HistoryRecord},
    notify::{Notice, NoticeBoard, NoticeKind},
    session::{ADMIN_ROLE, USER_KEY, User, current_user, require_user, sign_in, sign_out},
    stock::{Editor, StockPage},
    store::Store,
    tracking::{
        Badge, STATUS_DELIVERED, TimelineEvent, TrackingPage, TrackingRecord, TrackingTable,
    },
    validation::{Field, FieldKind, Form, is_valid_email, is_valid_phone},
};
