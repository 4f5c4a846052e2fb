//! Checkout page
//!
//! Owns the book selection list, the in-memory cart and the customer form.
//! Submitting an order is a UI-only simulation: it validates, clears the
//! cart and resets the form, but nothing is persisted.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing::debug;

use crate::{
    cart::Cart,
    catalog::Book,
    format::format_rupiah,
    notify::NoticeBoard,
    validation::{Field, FieldKind, Form},
};

/// Builds the empty customer details form for checkout.
#[must_use]
pub fn checkout_form() -> Form {
    Form::with_fields([
        Field::required("nama", FieldKind::Text),
        Field::required("email", FieldKind::Email),
        Field::required("telepon", FieldKind::Phone),
        Field::required("alamat", FieldKind::Text),
    ])
}

/// The checkout page controller.
///
/// State is passed in at construction and scoped to this page's lifetime;
/// nothing here is shared with the other pages.
#[derive(Debug)]
pub struct CheckoutPage {
    books: Vec<Book>,
    cart: Cart,
    form: Form,
    notices: NoticeBoard,
}

impl CheckoutPage {
    /// Creates the page over the given selection of books.
    pub fn new(books: impl Into<Vec<Book>>) -> Self {
        CheckoutPage {
            books: books.into(),
            cart: Cart::new(),
            form: checkout_form(),
            notices: NoticeBoard::new(),
        }
    }

    /// The books offered on this page.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Adds the book with the given code to the cart and posts a success
    /// notice. Returns `false` for a code not in the selection.
    pub fn add_to_cart(&mut self, code: &str) -> bool {
        let Some(book) = self.books.iter().find(|book| book.code == code) else {
            return false;
        };
        let book = book.clone();
        let name = book.name.clone();

        self.cart.add(book);
        self.notices.success(format!("{name} ditambahkan ke keranjang"));

        true
    }

    /// Applies a quantity delta to a cart line; the result never drops
    /// below one.
    pub fn update_quantity(&mut self, code: &str, delta: i64) {
        self.cart.update_quantity(code, delta);
    }

    /// Removes a cart line and posts a success notice when one existed.
    pub fn remove_from_cart(&mut self, code: &str) {
        if self.cart.remove(code) {
            self.notices.success("Item dihapus dari keranjang");
        }
    }

    /// Submits the order.
    ///
    /// Rejected, with an error notice and no state change, when the form
    /// fails validation or the cart is empty. On success the cart is
    /// cleared, the form reset, and a success notice posted.
    pub fn submit_order(&mut self) -> bool {
        if !self.form.validate() {
            self.notices.error("Periksa kembali data pemesanan");
            return false;
        }

        if self.cart.is_empty() {
            self.notices.error("Keranjang masih kosong");
            return false;
        }

        debug!(lines = self.cart.len(), subtotal = self.cart.subtotal(), "order submitted");

        self.cart.clear();
        self.form.reset();
        self.notices.success("Pesanan berhasil dibuat!");

        true
    }

    /// The cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The customer form.
    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// The customer form, for filling in values.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Notices posted by this page.
    #[must_use]
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Dismisses the visible notice.
    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss();
    }

    /// Renders the book selection list as a table.
    #[must_use]
    pub fn render_selection(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Kode", "Judul", "Harga", "Stok"]);

        for book in &self.books {
            builder.push_record([
                book.code.clone(),
                book.name.clone(),
                book.price.clone(),
                book.stock.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Columns::new(2..4), Alignment::right());

        table.to_string()
    }

    /// Renders the cart contents and total, or the empty-cart placeholder.
    #[must_use]
    pub fn render_cart(&self) -> String {
        if self.cart.is_empty() {
            return "Keranjang masih kosong".to_owned();
        }

        let mut builder = Builder::default();

        builder.push_record(["Buku", "Jumlah", "Subtotal"]);

        for line in self.cart.iter() {
            builder.push_record([
                line.book().name.clone(),
                line.quantity().to_string(),
                format_rupiah(line.line_total()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Columns::new(1..3), Alignment::right());

        format!("{table}\nTotal: {}", format_rupiah(self.cart.subtotal()))
    }
}
