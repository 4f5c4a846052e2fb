//! Integration test for stock administration against a real store directory.
//!
//! The catalog is seeded from the YAML fixture on first open; every
//! mutation persists the whole array back to the store, and a reopened page
//! picks the persisted copy over the fixture with no merge.

use tempfile::TempDir;
use testresult::TestResult;

use pustaka::{
    catalog::Book,
    fixtures::Fixture,
    session::{ADMIN_ROLE, User, sign_in},
    stock::StockPage,
    store::Store,
};

fn admin_store(dir: &TempDir) -> Store {
    let store = Store::open(dir.path());
    sign_in(
        &store,
        &User {
            name: "Siti".to_owned(),
            role: ADMIN_ROLE.to_owned(),
        },
    );

    store
}

#[test]
fn mutations_survive_a_page_reload() -> TestResult {
    let dir = TempDir::new()?;
    let fixture = Fixture::new().catalog()?;
    let seeded = fixture.len();

    let mut page = StockPage::new(admin_store(&dir), fixture.clone());
    assert_eq!(page.catalog().len(), seeded);

    // Add a book through the editor dialog.
    page.open_add();
    {
        let draft = page.editor_mut().expect("editor should be open").draft_mut();
        draft.code = "BK900".to_owned();
        draft.name = "Pulang".to_owned();
        draft.category = "Novel".to_owned();
        draft.edition = "Cetakan ke-1".to_owned();
        draft.stock = 3;
        draft.price = "Rp 70.000".to_owned();
    }
    assert!(page.save());

    // Delete one of the seeded books, with confirmation.
    assert!(page.delete("BK001", true));

    // A fresh page over the same store sees the persisted copy, not the
    // fixture: the add and the delete both survive.
    let reloaded = StockPage::new(Store::open(dir.path()), fixture);
    assert_eq!(reloaded.catalog().len(), seeded);
    assert!(reloaded.catalog().contains("BK900"));
    assert!(!reloaded.catalog().contains("BK001"));

    Ok(())
}

#[test]
fn editing_a_seeded_book_keeps_catalog_order() -> TestResult {
    let dir = TempDir::new()?;
    let fixture = Fixture::new().catalog()?;

    let mut page = StockPage::new(admin_store(&dir), fixture);

    assert!(page.open_edit("BK002"));
    page.editor_mut()
        .expect("editor should be open")
        .draft_mut()
        .stock = 99;
    assert!(page.save());

    let codes: Vec<&str> = page.catalog().iter().map(|book| book.code.as_str()).collect();
    assert_eq!(codes.first().copied(), Some("BK001"), "order must be stable");
    assert_eq!(page.catalog().get("BK002").map(|book| book.stock), Some(99));

    Ok(())
}

#[test]
fn guest_page_still_lists_but_hides_admin_controls() -> TestResult {
    let dir = TempDir::new()?;
    let fixture = Fixture::new().catalog()?;

    let page = StockPage::new(Store::open(dir.path()), fixture);
    let table = page.render_table();

    assert!(!page.admin_controls());
    assert!(table.contains("BK001"), "guest should still see stock:\n{table}");
    assert!(!table.contains("Hapus"), "guest must not see delete:\n{table}");

    Ok(())
}

#[test]
fn a_hand_written_store_override_supersedes_the_fixture() -> TestResult {
    let dir = TempDir::new()?;
    let store = Store::open(dir.path());

    let only: Vec<Book> = vec![Book {
        code: "BK555".to_owned(),
        name: "Perahu Kertas".to_owned(),
        category: "Novel".to_owned(),
        edition: "Cetakan ke-9".to_owned(),
        stock: 2,
        price: "Rp 79.000".to_owned(),
        ..Book::default()
    }];
    assert!(store.set(pustaka::catalog::CATALOG_KEY, &only));

    let page = StockPage::new(store, Fixture::new().catalog()?);

    assert_eq!(page.catalog().len(), 1, "persisted copy must fully replace the fixture");
    assert!(page.catalog().contains("BK555"));

    Ok(())
}
