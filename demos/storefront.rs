//! Storefront Demo
//!
//! Walks the storefront pages over the seed fixtures: greets, lists the
//! stock table, fills a cart and places an order, looks up a shipment, and
//! prints the order history.
//!
//! Use `-s` to point the persistent store at a directory
//! Use `-f` to point at a different fixture directory
//! Use `-t` to look up a specific DO number

use anyhow::Result;
use clap::Parser;

use pustaka::{
    checkout::CheckoutPage,
    fixtures::Fixture,
    format,
    history::HistoryPage,
    stock::StockPage,
    store::Store,
    tracking::TrackingPage,
    utils::DemoArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = DemoArgs::parse();
    let fixture = Fixture::with_base_path(&args.fixtures);

    println!("{}!\n", format::greeting());

    // Stock page: persisted catalog copy wins over the fixture.
    let stock = StockPage::new(Store::open(&args.store), fixture.catalog()?);
    println!("{}\n", stock.render_table());

    // Checkout: two copies of the first seeded book.
    let mut checkout = CheckoutPage::new(stock.catalog().books().to_vec());
    if let Some(first) = stock.catalog().books().first() {
        let code = first.code.clone();
        checkout.add_to_cart(&code);
        checkout.add_to_cart(&code);
    }
    println!("{}\n", checkout.render_cart());

    checkout.form_mut().set_value("nama", "Budi Santoso");
    checkout.form_mut().set_value("email", "budi@example.com");
    checkout.form_mut().set_value("telepon", "0812-3456-7890");
    checkout.form_mut().set_value("alamat", "Jl. Melati No. 5, Bandung");
    checkout.submit_order();

    if let Some(notice) = checkout.notices().current() {
        println!("[{}] {}\n", if notice.is_success() { "ok" } else { "!!" }, notice.message());
    }

    // Tracking page.
    let mut tracking = TrackingPage::new(fixture.tracking()?);
    let number = args.track.as_deref().unwrap_or("DO-2025-001");
    tracking.lookup(number);

    match tracking.render() {
        Some(panel) => println!("{panel}\n"),
        None => {
            if let Some(notice) = tracking.notices().current() {
                println!("[!!] {}\n", notice.message());
            }
        }
    }

    // History page.
    let history = HistoryPage::new(fixture.history()?);
    println!("{}", history.render_table());

    Ok(())
}
