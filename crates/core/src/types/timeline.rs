//! Append-only status timelines.
//!
//! Every entity with a lifecycle (orders, warranty claims, leads, support
//! tickets) records its status history in the same [`Timeline`] shape.
//! The timeline is append-only and chronologically non-decreasing, and its
//! last entry always matches the entity's current status. The one
//! exception is an order still in `draft`, whose timeline is empty until
//! submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One status change: the status entered, when, and an optional note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry<S> {
    pub status: S,
    pub at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An append-only sequence of status changes.
///
/// Serializes transparently as an array of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline<S>(Vec<TimelineEntry<S>>);

impl<S> Timeline<S> {
    /// An empty timeline (a draft order's initial state).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a status change.
    ///
    /// The stored timestamp is never earlier than the latest existing
    /// entry, so the sequence stays chronological even if the caller's
    /// clock runs behind.
    pub fn record(&mut self, status: S, at: DateTime<Utc>, note: Option<String>) {
        let at = match self.0.last() {
            Some(last) if last.at > at => last.at,
            _ => at,
        };
        self.0.push(TimelineEntry { status, at, note });
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TimelineEntry<S>> {
        self.0.last()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry<S>] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Copy> Timeline<S> {
    /// A timeline seeded with a single entry, for entities that begin life
    /// in a recorded state (claims, tickets, leads).
    #[must_use]
    pub fn seeded(status: S, at: DateTime<Utc>, note: Option<String>) -> Self {
        let mut timeline = Self::new();
        timeline.record(status, at, note);
        timeline
    }

    /// The status of the most recent entry, if any.
    #[must_use]
    pub fn current(&self) -> Option<S> {
        self.0.last().map(|entry| entry.status)
    }
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self::new()
    }
}
