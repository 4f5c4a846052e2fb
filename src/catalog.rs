//! Catalog
//!
//! The set of sellable book records. `Book.code` is the unique key across
//! the catalog and the cart, and every CRUD operation here addresses records
//! by that code rather than by array position, so a reorder or filter
//! between render and save cannot corrupt a different record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::parse_rupiah;

/// Store key under which the overriding catalog copy is persisted.
pub const CATALOG_KEY: &str = "catalog";

/// Cover image path used when a book has none of its own.
pub const DEFAULT_COVER: &str = "img/default-cover.jpg";

fn default_cover() -> String {
    DEFAULT_COVER.to_owned()
}

/// A sellable book record.
///
/// The price is carried as the storefront's formatted string
/// (e.g. `Rp 85.000`); [`Book::price_minor`] parses it for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique item code, the key across catalog and cart.
    pub code: String,
    /// Title.
    pub name: String,
    /// Category, e.g. `Novel`.
    pub category: String,
    /// Edition or printing.
    pub edition: String,
    /// Units in stock.
    pub stock: u32,
    /// Formatted price string.
    pub price: String,
    /// Cover image path.
    #[serde(default = "default_cover")]
    pub cover: String,
}

impl Book {
    /// The price in whole rupiah, parsed by stripping non-digits from the
    /// formatted string. `None` when the string carries no digits.
    #[must_use]
    pub fn price_minor(&self) -> Option<u64> {
        parse_rupiah(&self.price)
    }
}

impl Default for Book {
    fn default() -> Self {
        Book {
            code: String::new(),
            name: String::new(),
            category: String::new(),
            edition: String::new(),
            stock: 0,
            price: String::new(),
            cover: default_cover(),
        }
    }
}

/// Errors from code-keyed catalog mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No record with the given code remains.
    #[error("No book with code {0}")]
    NotFound(String),

    /// The replacement's code is already used by a different record.
    #[error("Code {0} is already in use")]
    DuplicateCode(String),
}

/// Outcome of a code-keyed [`Catalog::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No record with that code existed; the book was appended.
    Added,
    /// An existing record with that code was overwritten in place.
    Updated,
}

/// An ordered collection of books, uniquely keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from the given books, preserving their order.
    pub fn from_books(books: impl Into<Vec<Book>>) -> Self {
        Catalog {
            books: books.into(),
        }
    }

    /// Looks up a book by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.code == code)
    }

    /// Whether a book with the given code exists.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Inserts or overwrites by the book's own code. An overwrite keeps the
    /// record's position and leaves the catalog length unchanged.
    pub fn upsert(&mut self, book: Book) -> Upsert {
        match self.books.iter_mut().find(|slot| slot.code == book.code) {
            Some(slot) => {
                *slot = book;
                Upsert::Updated
            }
            None => {
                self.books.push(book);
                Upsert::Added
            }
        }
    }

    /// Overwrites the record currently stored under `code` with `book`,
    /// in place. This is how an edit that changes the code itself lands.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: no record under `code` remains (it
    ///   was deleted between opening the editor and saving).
    /// - [`CatalogError::DuplicateCode`]: the replacement's code belongs
    ///   to a different record; landing it would break code uniqueness.
    pub fn replace(&mut self, code: &str, book: Book) -> Result<(), CatalogError> {
        if book.code != code && self.contains(&book.code) {
            return Err(CatalogError::DuplicateCode(book.code));
        }

        match self.books.iter_mut().find(|slot| slot.code == code) {
            Some(slot) => {
                *slot = book;
                Ok(())
            }
            None => Err(CatalogError::NotFound(code.to_owned())),
        }
    }

    /// Removes and returns the book with the given code.
    pub fn remove(&mut self, code: &str) -> Option<Book> {
        let position = self.books.iter().position(|book| book.code == code)?;

        Some(self.books.remove(position))
    }

    /// Iterates over the books in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// The books as a slice, in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Serializes the catalog as comma-joined rows, one book per line, in
    /// field order. No header row and no quoting.
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.books
            .iter()
            .map(|book| {
                format!(
                    "{},{},{},{},{},{},{}",
                    book.code,
                    book.name,
                    book.category,
                    book.edition,
                    book.stock,
                    book.price,
                    book.cover
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
