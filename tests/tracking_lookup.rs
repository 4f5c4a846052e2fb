//! Integration test for tracking lookup over the seed shipment table.

use testresult::TestResult;

use pustaka::{
    fixtures::Fixture,
    notify::NoticeKind,
    tracking::{Badge, TrackingPage},
};

#[test]
fn seeded_delivered_shipment_renders_with_full_progress() -> TestResult {
    let mut page = TrackingPage::new(Fixture::new().tracking()?);

    assert!(page.lookup("DO-2025-001"));

    let record = page.result().expect("panel should be visible");
    assert_eq!(record.badge(), Badge::Success);
    assert_eq!(record.progress(), 100);

    let rendered = page.render().expect("panel should render");
    assert!(rendered.contains("Budi Santoso"), "missing customer:\n{rendered}");
    assert!(rendered.contains("DO: DO-2025-001 • JNE"), "missing DO line:\n{rendered}");
    assert!(
        rendered.contains("[status-success] 100%"),
        "wrong badge or progress:\n{rendered}"
    );

    Ok(())
}

#[test]
fn in_process_shipment_gets_warning_styling_and_half_progress() -> TestResult {
    let mut page = TrackingPage::new(Fixture::new().tracking()?);

    assert!(page.lookup("DO-2025-002"));

    let record = page.result().expect("panel should be visible");
    assert_eq!(record.badge(), Badge::Warning);
    assert_eq!(record.progress(), 50);

    Ok(())
}

#[test]
fn a_miss_hides_the_panel_and_posts_an_error() -> TestResult {
    let mut page = TrackingPage::new(Fixture::new().tracking()?);

    // Show a result first so the miss demonstrably hides it.
    page.lookup("DO-2025-003");
    assert!(page.result().is_some());

    assert!(!page.lookup("DO-1999-000"));
    assert!(page.result().is_none());
    assert!(page.render().is_none());

    let notice = page.notices().last().expect("a notice should be posted");
    assert_eq!(notice.kind(), NoticeKind::Error);
    assert_eq!(notice.message(), "Nomor DO tidak ditemukan");

    Ok(())
}
