use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::config::Config;
use crate::fraud::models::{format_timestamp, FraudEvent, Severity, EVENT_TYPES};
use crate::mockdata::{vocab, DatasetGenerator, GenerationReport};
use crate::store::DataStore;

const SEVERITIES: &[Severity] = &[Severity::Low, Severity::Medium, Severity::High];

const NOTES: &[&str] = &[
    "User switched tabs multiple times.",
    "Microphone muted for over 2 minutes.",
    "Detected potential background voice.",
    "Browser minimized unexpectedly.",
    "High noise level detected near candidate.",
];

/// Furthest back an event may be placed, in minutes before `now`.
const WINDOW_MINUTES: i64 = 600;

pub fn event_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("FM-{}", rng.gen_range(1000..=9999))
}

pub fn generate_event<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> FraudEvent {
    let candidate = vocab::english_name(rng);
    let event_type = EVENT_TYPES
        .choose(rng)
        .map(|(en, _)| en.to_string())
        .unwrap_or_default();
    let at = now - Duration::minutes(rng.gen_range(1..=WINDOW_MINUTES));

    FraudEvent {
        event_id: event_id(rng),
        candidate,
        event_type,
        severity: SEVERITIES
            .choose(rng)
            .copied()
            .unwrap_or(Severity::Low)
            .to_string(),
        timestamp: format_timestamp(at),
        notes: Some(vocab::choose(rng, NOTES).to_string()),
        ..FraudEvent::default()
    }
}

pub struct FraudGenerator {
    events: usize,
    output: String,
}

impl FraudGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            events: config.sizes.fraud_events,
            output: config.files.fraud.clone(),
        }
    }
}

impl DatasetGenerator for FraudGenerator {
    fn name(&self) -> &'static str {
        "fraud"
    }

    fn generate(&self, store: &DataStore, rng: &mut dyn RngCore) -> Result<GenerationReport> {
        let now = Utc::now().naive_utc();
        let events: Vec<FraudEvent> = (0..self.events).map(|_| generate_event(rng, now)).collect();

        let path = store
            .save(&self.output, &events)
            .context("writing fraud events")?;

        Ok(GenerationReport {
            records: events.len(),
            outputs: vec![path],
        })
    }
}
