//! Stock administration
//!
//! Code-keyed CRUD over the catalog, persisted through the key-value store.
//! A persisted catalog copy, when present, supersedes the static fixture
//! entirely — there is no merge. Admin controls are a client-side
//! visibility gate on the session user's role, not access control.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing::debug;

use crate::{
    catalog::{Book, CATALOG_KEY, Catalog, CatalogError, Upsert},
    notify::NoticeBoard,
    session::{self, User},
    store::Store,
};

/// The stock editor dialog: a draft book plus, for edits, the code of the
/// record being replaced. `editing` is captured when the dialog opens, so a
/// save still lands on the right record even if the catalog is reordered in
/// between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    draft: Book,
    editing: Option<String>,
}

impl Editor {
    fn add() -> Self {
        Editor {
            draft: Book::default(),
            editing: None,
        }
    }

    fn edit(book: Book) -> Self {
        Editor {
            editing: Some(book.code.clone()),
            draft: book,
        }
    }

    /// The draft book.
    #[must_use]
    pub fn draft(&self) -> &Book {
        &self.draft
    }

    /// The draft book, for filling in fields.
    pub fn draft_mut(&mut self) -> &mut Book {
        &mut self.draft
    }

    /// The code of the record being edited, or `None` for an add.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// The dialog title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Buku"
        } else {
            "Tambah Buku"
        }
    }
}

/// The stock page controller.
#[derive(Debug)]
pub struct StockPage {
    store: Store,
    catalog: Catalog,
    user: Option<User>,
    editor: Option<Editor>,
    notices: NoticeBoard,
}

impl StockPage {
    /// Creates the page: the catalog comes from the persisted store copy
    /// when one exists, else from the given fixture. The session user is
    /// read from the same store.
    pub fn new(store: Store, fixture: impl Into<Vec<Book>>) -> Self {
        let user = session::current_user(&store);
        let books = store.get::<Vec<Book>>(CATALOG_KEY).unwrap_or_else(|| fixture.into());

        StockPage {
            store,
            catalog: Catalog::from_books(books),
            user,
            editor: None,
            notices: NoticeBoard::new(),
        }
    }

    /// Whether the edit/delete/add controls are visible: the session user's
    /// role must be exactly `Admin`.
    #[must_use]
    pub fn admin_controls(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Opens the add dialog with a blank draft.
    pub fn open_add(&mut self) {
        self.editor = Some(Editor::add());
    }

    /// Opens the edit dialog pre-filled from the book with the given code.
    /// Returns `false` when no such book exists.
    pub fn open_edit(&mut self, code: &str) -> bool {
        let Some(book) = self.catalog.get(code) else {
            return false;
        };

        self.editor = Some(Editor::edit(book.clone()));

        true
    }

    /// The open editor dialog, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// The open editor dialog, for filling in the draft.
    pub fn editor_mut(&mut self) -> Option<&mut Editor> {
        self.editor.as_mut()
    }

    /// Closes the editor dialog without saving.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Saves the editor's draft and closes the dialog.
    ///
    /// An add upserts by the draft's code; an edit overwrites the record
    /// the dialog was opened on, even when the draft changed the code. On
    /// success the whole catalog is persisted back to the store. An edit
    /// is rejected with an error notice and no catalog change when its
    /// record was deleted while the dialog was open, or when a changed
    /// code collides with a different record — either would silently
    /// corrupt code uniqueness.
    pub fn save(&mut self) -> bool {
        let Some(Editor { draft, editing }) = self.editor.take() else {
            return false;
        };

        debug!(code = %draft.code, editing = editing.as_deref(), "saving book");

        let saved = match editing {
            Some(code) => match self.catalog.replace(&code, draft) {
                Ok(()) => {
                    self.notices.success("Data buku berhasil diperbarui");
                    true
                }
                Err(CatalogError::DuplicateCode(duplicate)) => {
                    self.notices.error(format!("Kode {duplicate} sudah digunakan"));
                    false
                }
                Err(CatalogError::NotFound(_)) => {
                    self.notices.error("Data buku tidak ditemukan");
                    false
                }
            },
            None => {
                match self.catalog.upsert(draft) {
                    Upsert::Added => self.notices.success("Buku baru berhasil ditambahkan"),
                    Upsert::Updated => self.notices.success("Data buku berhasil diperbarui"),
                }
                true
            }
        };

        if saved {
            self.persist();
        }

        saved
    }

    /// Deletes the book with the given code. The caller supplies the
    /// interactive confirmation answer; an unconfirmed delete is a no-op.
    /// On success the whole catalog is persisted back to the store.
    pub fn delete(&mut self, code: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        if self.catalog.remove(code).is_none() {
            return false;
        }

        self.persist();
        self.notices.success("Data buku berhasil dihapus");

        true
    }

    fn persist(&self) {
        self.store.set(CATALOG_KEY, self.catalog.books());
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Notices posted by this page.
    #[must_use]
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Serializes the catalog as CSV rows.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.catalog.to_csv()
    }

    /// Renders the stock table. The actions column shows the edit/delete
    /// controls only behind the admin gate.
    #[must_use]
    pub fn render_table(&self) -> String {
        let actions = if self.admin_controls() { "Edit | Hapus" } else { "-" };

        let mut builder = Builder::default();

        builder.push_record(["Kode", "Nama", "Jenis", "Edisi", "Stok", "Harga", "Aksi"]);

        for book in self.catalog.iter() {
            builder.push_record([
                book.code.clone(),
                book.name.clone(),
                book.category.clone(),
                book.edition.clone(),
                book.stock.to_string(),
                book.price.clone(),
                actions.to_owned(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Columns::new(4..6), Alignment::right());

        table.to_string()
    }

    /// Renders the card-grid view: one block per book with its cover path,
    /// title and category.
    #[must_use]
    pub fn render_grid(&self) -> String {
        self.catalog
            .iter()
            .map(|book| format!("[{}]\n{}\n{}", book.cover, book.name, book.category))
            .collect::<Vec<String>>()
            .join("\n\n")
    }
}
