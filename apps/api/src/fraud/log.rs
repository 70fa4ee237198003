//! Append-only fraud event log backed by the flat JSON file.
//!
//! Appends read the whole list, push, and rewrite the file. There is no
//! locking: two concurrent appends can race and the last writer wins.

use chrono::NaiveDateTime;

use crate::fraud::models::{format_timestamp, FraudEvent, Severity};
use crate::store::{DataStore, StoreError};

#[derive(Debug, Clone)]
pub struct NewFraudEvent {
    pub candidate: String,
    pub event_type: String,
    pub severity: Severity,
}

/// Stamps `new` with `event_id` and `now`, appends it, and returns the stored
/// event. Existing entries are written back unchanged, unknown fields included.
pub fn append_event(
    store: &DataStore,
    file: &str,
    new: NewFraudEvent,
    event_id: String,
    now: NaiveDateTime,
) -> Result<FraudEvent, StoreError> {
    let event = FraudEvent {
        event_id,
        candidate: new.candidate,
        event_type: new.event_type,
        severity: new.severity.to_string(),
        timestamp: format_timestamp(now),
        ..FraudEvent::default()
    };

    let mut events: Vec<FraudEvent> = store.load(file)?;
    events.push(event.clone());
    store.save(file, &events)?;

    Ok(event)
}
