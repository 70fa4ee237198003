use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Naive ISO-8601 with microseconds. Lexicographic order equals time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!(
                "unknown severity '{other}', expected Low, Medium or High"
            )),
        }
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integrity event raised during an online test or interview.
///
/// Read leniently: the log file may hold events written by other tools, so
/// missing fields default to empty and unknown fields are kept verbatim.
/// `severity` is the stored label; events logged here always carry one of
/// `Severity`'s labels, other values are kept but counted in no bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FraudEvent {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub candidate: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Monitored event kinds with their Arabic labels.
pub const EVENT_TYPES: &[(&str, &str)] = &[
    ("Tab Switch Detected", "تم اكتشاف تبديل التبويب"),
    ("Mic Muted During Interview", "إيقاف الميكروفون أثناء المقابلة"),
    ("Inactivity Timeout", "انتهاء المهلة بسبب الخمول"),
    ("Multiple Voices Detected", "تم اكتشاف أصوات متعددة"),
    ("Unauthorized App Opened", "فتح تطبيق غير مصرح به"),
    ("Camera Blocked", "حجب الكاميرا"),
    ("Screen Share Disabled", "تعطيل مشاركة الشاشة"),
    ("High Background Noise", "ضوضاء خلفية عالية"),
];

/// Arabic label of a known event type; unknown types are echoed unchanged.
pub fn arabic_event_label(event_type: &str) -> &str {
    EVENT_TYPES
        .iter()
        .find(|(en, _)| en.eq_ignore_ascii_case(event_type))
        .map(|(_, ar)| *ar)
        .unwrap_or(event_type)
}
