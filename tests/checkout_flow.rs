//! Integration test for the checkout flow over the seed catalog.
//!
//! Walks the whole page lifecycle: browse the fixture selection, aggregate
//! repeated adds into per-code lines, clamp quantity updates, reject a
//! premature submit, then place the order and verify the page is reset.

use testresult::TestResult;

use pustaka::{
    cart::CartLine,
    fixtures::Fixture,
    notify::NoticeKind,
    prelude::CheckoutPage,
};

#[test]
fn full_checkout_flow_against_the_seed_catalog() -> TestResult {
    let books = Fixture::new().catalog()?;
    let mut page = CheckoutPage::new(books);

    // Two copies of the first book, one of the third.
    assert!(page.add_to_cart("BK001"));
    assert!(page.add_to_cart("BK001"));
    assert!(page.add_to_cart("BK003"));

    assert_eq!(page.cart().len(), 2);
    assert_eq!(page.cart().get("BK001").map(CartLine::quantity), Some(2));

    // Seeded prices: BK001 = 85_000, BK003 = 98_000.
    assert_eq!(page.cart().subtotal(), 2 * 85_000 + 98_000);

    // Clamp: a huge decrement still leaves one copy.
    page.update_quantity("BK003", -50);
    assert_eq!(page.cart().get("BK003").map(CartLine::quantity), Some(1));

    // Incomplete form: rejected, cart untouched.
    assert!(!page.submit_order());
    assert_eq!(page.cart().len(), 2);
    assert_eq!(
        page.notices().last().map(pustaka::notify::Notice::kind),
        Some(NoticeKind::Error)
    );

    page.form_mut().set_value("nama", "Budi Santoso");
    page.form_mut().set_value("email", "budi@example.com");
    page.form_mut().set_value("telepon", "0812-3456-7890");
    page.form_mut().set_value("alamat", "Jl. Melati No. 5, Bandung");

    assert!(page.submit_order());
    assert!(page.cart().is_empty());
    assert_eq!(page.form().value("nama"), Some(""));
    assert_eq!(
        page.notices().last().map(pustaka::notify::Notice::message),
        Some("Pesanan berhasil dibuat!")
    );

    Ok(())
}

#[test]
fn submitting_an_empty_cart_never_succeeds() -> TestResult {
    let books = Fixture::new().catalog()?;
    let mut page = CheckoutPage::new(books);

    page.form_mut().set_value("nama", "Budi Santoso");
    page.form_mut().set_value("email", "budi@example.com");
    page.form_mut().set_value("telepon", "0812-3456-7890");
    page.form_mut().set_value("alamat", "Jl. Melati No. 5, Bandung");

    assert!(!page.submit_order());

    let notice = page.notices().last().expect("a notice should be posted");
    assert_eq!(notice.kind(), NoticeKind::Error);
    assert_eq!(notice.message(), "Keranjang masih kosong");
    assert!(
        page.notices().log().iter().all(|n| n.kind() == NoticeKind::Error),
        "an empty-cart submit must never post a success notice"
    );

    Ok(())
}

#[test]
fn removing_a_line_then_submitting_empty_is_rejected() -> TestResult {
    let books = Fixture::new().catalog()?;
    let mut page = CheckoutPage::new(books);

    page.add_to_cart("BK002");
    page.remove_from_cart("BK002");

    assert!(page.cart().is_empty());
    assert_eq!(
        page.notices().last().map(pustaka::notify::Notice::message),
        Some("Item dihapus dari keranjang")
    );

    page.form_mut().set_value("nama", "Siti Rahma");
    page.form_mut().set_value("email", "siti@example.com");
    page.form_mut().set_value("telepon", "+62 813 9999 0000");
    page.form_mut().set_value("alamat", "Jl. Kenanga No. 2, Jakarta");

    assert!(!page.submit_order());

    Ok(())
}
