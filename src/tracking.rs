//! Shipment tracking
//!
//! Exact-match lookup of a DO (delivery order) number in a read-only table
//! of shipment records, each carrying an ordered timeline of events. Status
//! styling is binary: exactly `Dikirim` gets success styling and a 100%
//! progress bar, anything else warning styling and 50% — progress is not a
//! measure of timeline completion.

use std::fmt::{self, Write};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tabled::{builder::Builder, settings::Style};
use tracing::debug;

use crate::notify::NoticeBoard;

/// Status string meaning the shipment has gone out.
pub const STATUS_DELIVERED: &str = "Dikirim";

/// Badge styling for a shipment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Status is exactly `Dikirim`.
    Success,
    /// Any other status.
    Warning,
}

impl Badge {
    /// The stylesheet class this badge maps to.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Badge::Success => "status-success",
            Badge::Warning => "status-warning",
        }
    }
}

/// One step in a shipment's journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// When the step happened, as recorded by the carrier.
    pub time: String,
    /// What happened.
    pub description: String,
}

/// A read-only shipment record, keyed by its DO number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingRecord {
    /// Customer name.
    pub customer: String,
    /// DO (delivery order) number, the tracking key.
    pub do_number: String,
    /// Carrier name.
    pub carrier: String,
    /// Ship date, already formatted.
    pub ship_date: String,
    /// Package description.
    pub package: String,
    /// Order total, already formatted.
    pub total: String,
    /// Status string; only `Dikirim` is special.
    pub status: String,
    /// Journey events, most recent first. The first entry renders as the
    /// active dot.
    pub timeline: SmallVec<[TimelineEvent; 4]>,
}

impl TrackingRecord {
    /// Badge styling for this record's status.
    #[must_use]
    pub fn badge(&self) -> Badge {
        if self.status == STATUS_DELIVERED {
            Badge::Success
        } else {
            Badge::Warning
        }
    }

    /// Two-valued progress percentage: 100 for `Dikirim`, else 50.
    #[must_use]
    pub fn progress(&self) -> u8 {
        if self.status == STATUS_DELIVERED { 100 } else { 50 }
    }
}

/// The static tracking table, keyed by DO number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingTable {
    shipments: FxHashMap<String, TrackingRecord>,
}

impl TrackingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its own DO number.
    pub fn insert(&mut self, record: TrackingRecord) {
        self.shipments.insert(record.do_number.clone(), record);
    }

    /// Exact-match lookup by DO number.
    #[must_use]
    pub fn lookup(&self, number: &str) -> Option<&TrackingRecord> {
        self.shipments.get(number)
    }

    /// The number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Whether the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}

impl FromIterator<TrackingRecord> for TrackingTable {
    fn from_iter<I: IntoIterator<Item = TrackingRecord>>(iter: I) -> Self {
        let mut table = TrackingTable::new();

        for record in iter {
            table.insert(record);
        }

        table
    }
}

/// The tracking page controller: the table plus the currently shown result.
#[derive(Debug)]
pub struct TrackingPage {
    table: TrackingTable,
    result: Option<TrackingRecord>,
    notices: NoticeBoard,
}

impl TrackingPage {
    /// Creates the page over the given table, with no result showing.
    #[must_use]
    pub fn new(table: TrackingTable) -> Self {
        TrackingPage {
            table,
            result: None,
            notices: NoticeBoard::new(),
        }
    }

    /// Looks up a DO number. A hit shows the record in the result panel and
    /// posts a success notice; a miss hides the panel and posts an error
    /// notice. Returns whether the number was found.
    pub fn lookup(&mut self, number: &str) -> bool {
        debug!(number, "tracking lookup");

        match self.table.lookup(number) {
            Some(record) => {
                self.result = Some(record.clone());
                self.notices.success("Data pengiriman ditemukan!");
                true
            }
            None => {
                self.result = None;
                self.notices.error("Nomor DO tidak ditemukan");
                false
            }
        }
    }

    /// The record in the result panel; `None` means the panel is hidden.
    #[must_use]
    pub fn result(&self) -> Option<&TrackingRecord> {
        self.result.as_ref()
    }

    /// Notices posted by this page.
    #[must_use]
    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Renders the result panel, or `None` while it is hidden.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.result.as_ref().and_then(|record| render_record(record).ok())
    }
}

fn render_record(record: &TrackingRecord) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", record.customer)?;
    writeln!(out, "DO: {} • {}", record.do_number, record.carrier)?;
    writeln!(out, "Tanggal Kirim: {}", record.ship_date)?;
    writeln!(out, "Paket: {}", record.package)?;
    writeln!(out, "Total: {}", record.total)?;
    writeln!(
        out,
        "Status: {} [{}] {}%",
        record.status,
        record.badge().css_class(),
        record.progress()
    )?;

    let mut builder = Builder::default();

    for (index, event) in record.timeline.iter().enumerate() {
        let dot = if index == 0 { "●" } else { "○" };

        builder.push_record([dot.to_owned(), event.time.clone(), event.description.clone()]);
    }

    let mut timeline = builder.build();
    timeline.with(Style::blank());

    write!(out, "{timeline}")?;

    Ok(out)
}
