//! Order history
//!
//! Static render of the order-history fixture as a numbered table.

use serde::{Deserialize, Serialize};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// One past order, read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Order date, already formatted.
    pub date: String,
    /// DO (delivery order) number.
    pub do_number: String,
    /// Book name.
    pub book: String,
    /// Order total, already formatted.
    pub total: String,
    /// Free-form status string, e.g. `Selesai`.
    pub status: String,
}

impl HistoryRecord {
    /// The stylesheet class for this record's status: the lowercased
    /// status string.
    #[must_use]
    pub fn status_class(&self) -> String {
        self.status.to_lowercase()
    }
}

/// The history page: a static list of past orders.
#[derive(Debug, Clone, Default)]
pub struct HistoryPage {
    orders: Vec<HistoryRecord>,
}

impl HistoryPage {
    /// Creates the page over the given orders.
    pub fn new(orders: impl Into<Vec<HistoryRecord>>) -> Self {
        HistoryPage {
            orders: orders.into(),
        }
    }

    /// The orders, in fixture order.
    #[must_use]
    pub fn orders(&self) -> &[HistoryRecord] {
        &self.orders
    }

    /// Renders the numbered history table, or the empty placeholder when
    /// there are no orders.
    #[must_use]
    pub fn render_table(&self) -> String {
        if self.orders.is_empty() {
            return "Belum ada riwayat pemesanan.".to_owned();
        }

        let mut builder = Builder::default();

        builder.push_record(["No.", "Tanggal", "Nomor DO", "Buku", "Total", "Status"]);

        for (index, order) in self.orders.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                order.date.clone(),
                order.do_number.clone(),
                order.book.clone(),
                order.total.clone(),
                order.status.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Columns::new(4..5), Alignment::right());

        table.to_string()
    }
}
