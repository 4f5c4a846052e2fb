//! Cart
//!
//! In-memory checkout cart: one line per distinct book code, each with a
//! quantity that never drops below one. The cart lives only for the checkout
//! session and is never persisted.

use crate::catalog::Book;

/// One catalog item plus a selected quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    book: Book,
    quantity: u32,
}

impl CartLine {
    fn new(book: Book) -> Self {
        CartLine { book, quantity: 1 }
    }

    /// The book on this line.
    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// The selected quantity, always at least one.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Parsed price times quantity, saturating at `u64::MAX`. A price
    /// string with no digits counts as zero rather than poisoning the
    /// total.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.book
            .price_minor()
            .unwrap_or(0)
            .saturating_mul(u64::from(self.quantity))
    }
}

/// The in-memory cart, keyed by book code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book: an existing line with the same code has its quantity
    /// incremented, otherwise a new line with quantity one is appended.
    pub fn add(&mut self, book: Book) {
        match self.lines.iter_mut().find(|line| line.book.code == book.code) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(book)),
        }
    }

    /// Applies a quantity delta to the line with the given code, clamping
    /// the result to a minimum of one. Unknown codes are a no-op; a line
    /// only leaves the cart through [`Cart::remove`].
    pub fn update_quantity(&mut self, code: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.book.code == code) {
            let next = i64::from(line.quantity).saturating_add(delta).max(1);

            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Removes the line with the given code. Returns whether one existed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.book.code != code);

        self.lines.len() != before
    }

    /// The line with the given code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.book.code == code)
    }

    /// Sum of parsed price times quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(0, u64::saturating_add)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterates over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// The number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
