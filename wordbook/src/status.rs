//! Lookup lifecycle: which section of the page is showing and which request
//! is allowed to update it.
//!
//! Every submit starts a new lookup with a fresh [`CancellationToken`] and a
//! new [`LookupId`]. The previous token is cancelled, and any result that still
//! arrives for an older id is dropped by [`LookupSession::complete`].

use dictionary::{DictionaryError, Entry, EntrySummary};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LookupId(u64);

#[derive(Debug, Clone, Default)]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading {
        word: String,
    },
    Success {
        word: String,
        entries: Vec<Entry>,
    },
    Error {
        word: String,
        message: String,
    },
}

impl LookupStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading { .. })
    }

    /// Summary of the entry on display, if the last lookup succeeded with one.
    pub fn summary(&self) -> Option<EntrySummary> {
        match self {
            LookupStatus::Success { entries, .. } => EntrySummary::from_entries(entries),
            _ => None,
        }
    }
}

/// Handed to the task performing one lookup.
#[derive(Debug, Clone)]
pub struct LookupTicket {
    pub id: LookupId,
    pub word: String,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

#[derive(Debug, Default)]
pub struct LookupSession {
    status: LookupStatus,
    current: LookupId,
    cancel: Option<CancellationToken>,
}

impl LookupSession {
    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    /// Starts a lookup for `word`, superseding whatever was in flight.
    pub fn begin(&mut self, word: impl Into<String>) -> LookupTicket {
        if let Some(previous) = self.cancel.take() {
            previous.cancel();
        }
        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());
        self.current = LookupId(self.current.0 + 1);

        let word = word.into();
        tracing::debug!(id = self.current.0, %word, "lookup started");
        self.status = LookupStatus::Loading { word: word.clone() };
        LookupTicket {
            id: self.current,
            word,
            cancel,
        }
    }

    pub fn complete(
        &mut self,
        id: LookupId,
        outcome: Result<Vec<Entry>, DictionaryError>,
    ) -> Applied {
        let word = match &self.status {
            LookupStatus::Loading { word } if id == self.current => word.clone(),
            _ => {
                tracing::debug!(id = id.0, current = self.current.0, "dropping stale lookup result");
                return Applied::Stale;
            }
        };
        self.cancel = None;
        self.status = match outcome {
            Ok(entries) => {
                tracing::debug!(id = id.0, count = entries.len(), "lookup succeeded");
                LookupStatus::Success { word, entries }
            }
            Err(error) => {
                if error.is_not_found() {
                    tracing::debug!(id = id.0, %word, "no definitions found");
                } else {
                    tracing::info!(id = id.0, %error, "lookup failed");
                }
                LookupStatus::Error {
                    word,
                    message: error.display_message(),
                }
            }
        };
        Applied::Current
    }
}
