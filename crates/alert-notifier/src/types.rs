//! Toast and event type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity as shown on a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Medium
    }
}

impl Severity {
    /// Parse a severity string from the API. Unknown values map to `Medium`.
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "critical" => Self::Critical,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// A newly detected alert, visible until dismissed or expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertToast {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub patient_name: Option<String>,
    pub rule: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Why a toast left the visible stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    /// The toast lifetime elapsed.
    Expired,
    /// Dismissed by a user action.
    User,
    /// Pushed out of the capped stack by newer toasts.
    Evicted,
}

/// Poller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollerPhase {
    Idle,
    Priming,
    Waiting,
    Polling,
    Disabled,
    Stopped,
}

/// Change notifications published to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    Shown { toast: AlertToast },
    Dismissed { id: String, reason: DismissReason },
    Toggled { enabled: bool },
}
