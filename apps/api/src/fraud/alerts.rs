use serde::Serialize;

use crate::fraud::models::{arabic_event_label, FraudEvent, Severity};
use crate::stats::most_frequent;

pub const RECENT_ALERT_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FraudAlerts {
    pub total_events: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub recent_alerts: Vec<FraudEvent>,
    pub insight_en: String,
    pub insight_ar: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CandidateEvents {
    pub candidate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_events: Option<usize>,
    pub events: Vec<FraudEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Newest `limit` events. Timestamps compare as strings; the sort is stable,
/// so events sharing a timestamp keep their stored order.
pub fn most_recent(events: &[FraudEvent], limit: usize) -> Vec<FraudEvent> {
    let mut sorted: Vec<&FraudEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.into_iter().take(limit).cloned().collect()
}

/// Exact label match, so a stored "Critical" or "high" lands in no bucket.
pub fn count_severity(events: &[FraudEvent], severity: Severity) -> usize {
    events
        .iter()
        .filter(|e| e.severity == severity.as_str())
        .count()
}

/// Severity counts, the newest alerts and a bilingual one-line digest.
/// `None` when there are no events at all.
pub fn build_alerts(events: &[FraudEvent]) -> Option<FraudAlerts> {
    if events.is_empty() {
        return None;
    }

    let total_events = events.len();
    let high_risk = count_severity(events, Severity::High);
    let common_issue = most_frequent(events.iter().map(|e| e.event_type.as_str())).unwrap_or("");

    Some(FraudAlerts {
        total_events,
        high_risk,
        medium_risk: count_severity(events, Severity::Medium),
        low_risk: count_severity(events, Severity::Low),
        recent_alerts: most_recent(events, RECENT_ALERT_LIMIT),
        insight_en: format!(
            "{total_events} events analyzed, {high_risk} high-risk cases detected. \
             Most common issue: {common_issue}."
        ),
        insight_ar: format!(
            "تم تحليل {total_events} حدثًا، وتم اكتشاف {high_risk} حالة عالية الخطورة. \
             أكثر المشكلات شيوعًا: {}",
            arabic_event_label(common_issue)
        ),
    })
}

/// Events whose candidate name contains `query`, ignoring case.
pub fn events_for_candidate(events: &[FraudEvent], query: &str) -> CandidateEvents {
    let needle = query.to_lowercase();
    let matched: Vec<FraudEvent> = events
        .iter()
        .filter(|e| e.candidate.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matched.is_empty() {
        return CandidateEvents {
            candidate: query.to_string(),
            total_events: None,
            events: vec![],
            message: Some("No events logged.".to_string()),
        };
    }

    CandidateEvents {
        candidate: query.to_string(),
        total_events: Some(matched.len()),
        events: matched,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: &str, candidate: &str, severity: Severity, timestamp: &str) -> FraudEvent {
        FraudEvent {
            event_id: id.to_string(),
            candidate: candidate.to_string(),
            event_type: "Camera Blocked".to_string(),
            severity: severity.to_string(),
            timestamp: timestamp.to_string(),
            ..FraudEvent::default()
        }
    }

    #[test]
    fn test_severity_counts() {
        let events = vec![
            make_event("FM-1001", "A", Severity::High, "2025-01-01T10:00:00"),
            make_event("FM-1002", "B", Severity::High, "2025-01-01T11:00:00"),
            make_event("FM-1003", "C", Severity::Low, "2025-01-01T12:00:00"),
        ];
        let alerts = build_alerts(&events).unwrap();
        assert_eq!(alerts.total_events, 3);
        assert_eq!(alerts.high_risk, 2);
        assert_eq!(alerts.medium_risk, 0);
        assert_eq!(alerts.low_risk, 1);
        assert!(alerts.insight_en.starts_with("3 events analyzed, 2 high-risk"));
        assert!(alerts.insight_ar.contains("حجب الكاميرا"));
    }

    #[test]
    fn test_unknown_severity_counts_toward_total_only() {
        let mut odd = make_event("FM-1004", "D", Severity::Low, "2025-01-01T13:00:00");
        odd.severity = "Critical".to_string();
        let events = vec![
            odd,
            make_event("FM-1005", "E", Severity::High, "2025-01-01T09:00:00"),
        ];
        let alerts = build_alerts(&events).unwrap();
        assert_eq!(alerts.total_events, 2);
        assert_eq!(alerts.high_risk + alerts.medium_risk + alerts.low_risk, 1);
        assert_eq!(alerts.recent_alerts[0].severity, "Critical");
    }

    #[test]
    fn test_no_events_no_alerts() {
        assert!(build_alerts(&[]).is_none());
    }

    #[test]
    fn test_recent_alerts_newest_first_and_capped() {
        let events: Vec<_> = (0..60)
            .map(|i| {
                make_event(
                    &format!("FM-{}", 1000 + i),
                    "X",
                    Severity::Medium,
                    &format!("2025-01-01T10:{i:02}:00"),
                )
            })
            .collect();
        let recent = most_recent(&events, RECENT_ALERT_LIMIT);
        assert_eq!(recent.len(), 50);
        assert_eq!(recent[0].event_id, "FM-1059");
        assert_eq!(recent[49].event_id, "FM-1010");
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let events = vec![
            make_event("first", "X", Severity::Low, "2025-01-01T10:00:00"),
            make_event("second", "X", Severity::Low, "2025-01-01T10:00:00"),
        ];
        let recent = most_recent(&events, 10);
        assert_eq!(recent[0].event_id, "first");
        assert_eq!(recent[1].event_id, "second");
    }

    #[test]
    fn test_candidate_lookup_is_case_insensitive_substring() {
        let events = vec![
            make_event("FM-1", "Ahmed Al-Farsi", Severity::High, "2025-01-01T10:00:00"),
            make_event("FM-2", "Sara Haddad", Severity::Low, "2025-01-01T10:00:00"),
        ];
        let found = events_for_candidate(&events, "ahmed");
        assert_eq!(found.total_events, Some(1));
        assert_eq!(found.events[0].candidate, "Ahmed Al-Farsi");
        assert!(found.message.is_none());

        let missing = events_for_candidate(&events, "omar");
        assert!(missing.events.is_empty());
        assert_eq!(missing.message.as_deref(), Some("No events logged."));
    }
}
