//! Live alert notifications for the ward dashboard.
//!
//! Polls the ward API for active alerts, remembers every alert id it has
//! already seen, and surfaces newly triggered alerts as short-lived toasts.
//! Alerts that were already active when the notifier started are never
//! announced.

pub mod config;
pub mod identity;
pub mod known_ids;
pub mod notifier;
pub mod queue;
pub mod source;
pub mod types;

pub use config::NotifierConfig;
pub use notifier::{NotificationSnapshot, Notifier};
pub use source::AlertSource;
pub use types::{AlertToast, DismissReason, PollerPhase, Severity, ToastEvent};
