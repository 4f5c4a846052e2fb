//! Notifications
//!
//! Transient user-facing alerts. At most one notice is visible at a time:
//! posting a new one replaces whatever is currently showing. The board also
//! keeps an append-only log of everything posted, which is what the page
//! flows assert against.

/// Visual flavour of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Operation failed or was rejected.
    Error,
}

/// A single user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    /// The notice kind.
    #[must_use]
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// The notice message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is a success notice.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Holds the currently visible notice plus the log of everything posted.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    log: Vec<Notice>,
}

impl NoticeBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a success notice, replacing any visible one.
    pub fn success(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Success, message);
    }

    /// Posts an error notice, replacing any visible one.
    pub fn error(&mut self, message: impl Into<String>) {
        self.post(NoticeKind::Error, message);
    }

    fn post(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            kind,
            message: message.into(),
        };

        self.current = Some(notice.clone());
        self.log.push(notice);
    }

    /// The currently visible notice, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Dismisses the visible notice. The log is unaffected.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Everything ever posted, oldest first.
    #[must_use]
    pub fn log(&self) -> &[Notice] {
        &self.log
    }

    /// The most recently posted notice, dismissed or not.
    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.log.last()
    }
}
