//! In-memory, append-only per-session mockup history.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::providers::ConversationTurn;

/// One completed generation: a conversation turn plus provenance.
/// Entries are appended on success only and never mutated or removed.
#[derive(Clone, Debug, Serialize)]
pub struct HistoryEntry {
    pub description: String,
    pub html: String,
    pub timestamp: DateTime<Utc>,
    pub provider: String,
}

/// Session-keyed history map. Entirely volatile, process-wide state
/// with no eviction and no persistence.
#[derive(Debug, Default)]
pub struct HistoryStore {
    sessions: HashMap<String, Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns the session's new entry count.
    pub fn append(&mut self, session_id: &str, entry: HistoryEntry) -> usize {
        let entries = self.sessions.entry(session_id.to_string()).or_default();
        entries.push(entry);
        entries.len()
    }

    pub fn get(&self, session_id: &str) -> Option<&[HistoryEntry]> {
        self.sessions.get(session_id).map(Vec::as_slice)
    }

    /// The session's prior exchanges in insertion order, ready to be
    /// replayed as conversational context. Unknown sessions yield an
    /// empty sequence.
    pub fn turns(&self, session_id: &str) -> Vec<ConversationTurn> {
        self.sessions
            .get(session_id)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| ConversationTurn {
                        description: entry.description.clone(),
                        html: entry.html.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
