//! Alert notifier: priming, delayed polling, and toast lifetimes.
//!
//! A [`Notifier`] owns the known-id set and the visible toast stack for as
//! long as it lives. Polling runs in a cancellable session task; each toast
//! runs its own expiry task. Every task hangs off one root
//! [`CancellationToken`], so [`Notifier::shutdown`] stops all of them at once.

mod session;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::config::NotifierConfig;
use crate::known_ids::KnownIds;
use crate::queue::ToastQueue;
use crate::source::AlertSource;
use crate::types::{AlertToast, DismissReason, PollerPhase, ToastEvent};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Point-in-time view of the notifier for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationSnapshot {
    pub enabled: bool,
    pub phase: PollerPhase,
    /// Visible toasts, newest first.
    pub toasts: Vec<AlertToast>,
    /// Count shown on the bell; zero while disabled.
    pub badge_count: usize,
    pub known_ids: usize,
}

/// Handle to a running alert notifier. Cheap to clone.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

struct NotifierInner {
    source: Arc<dyn AlertSource>,
    config: NotifierConfig,
    state: Mutex<NotifierState>,
    events: broadcast::Sender<ToastEvent>,
    root: CancellationToken,
}

struct NotifierState {
    known: KnownIds,
    toasts: ToastQueue,
    timers: HashMap<String, CancellationToken>,
    enabled: bool,
    phase: PollerPhase,
    session: Option<CancellationToken>,
    session_seq: u64,
}

async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

impl Notifier {
    /// Create an idle notifier. Nothing is fetched until [`Notifier::start`].
    pub fn new(source: Arc<dyn AlertSource>, config: NotifierConfig) -> Self {
        let config = config.normalized();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(NotifierInner {
                source,
                state: Mutex::new(NotifierState {
                    known: KnownIds::new(),
                    toasts: ToastQueue::new(config.max_visible),
                    timers: HashMap::new(),
                    enabled: false,
                    phase: PollerPhase::Idle,
                    session: None,
                    session_seq: 0,
                }),
                config,
                events,
                root: CancellationToken::new(),
            }),
        }
    }

    /// Mount: prime the known ids and schedule polling.
    ///
    /// Must be called from within a tokio runtime. Calling it while a
    /// session is already running does nothing.
    pub fn start(&self) {
        self.set_enabled(true);
    }

    /// Enable or disable polling. Returns `true` if the state changed.
    ///
    /// Disabling stops the current session but keeps the known ids and the
    /// visible toasts, whose expiry timers keep running. Enabling starts a
    /// fresh priming + delayed polling session.
    pub fn set_enabled(&self, enabled: bool) -> bool {
        self.update_enabled(|_| enabled)
            .is_some_and(|(changed, _)| changed)
    }

    /// Flip the enabled flag. Returns the new value.
    pub fn toggle(&self) -> bool {
        self.update_enabled(|current| !current)
            .is_some_and(|(_, enabled)| enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.inner
            .state
            .lock()
            .map(|state| state.enabled)
            .unwrap_or(false)
    }

    pub fn phase(&self) -> PollerPhase {
        self.inner
            .state
            .lock()
            .map(|state| state.phase)
            .unwrap_or(PollerPhase::Stopped)
    }

    /// Dismiss a visible toast. Returns `false` if it was not visible.
    pub fn dismiss(&self, id: &str) -> bool {
        self.remove_toast(id, DismissReason::User).is_some()
    }

    /// Visible toasts, newest first.
    pub fn toasts(&self) -> Vec<AlertToast> {
        self.inner
            .state
            .lock()
            .map(|state| state.toasts.to_vec())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> NotificationSnapshot {
        let Ok(state) = self.inner.state.lock() else {
            return NotificationSnapshot {
                enabled: false,
                phase: PollerPhase::Stopped,
                toasts: Vec::new(),
                badge_count: 0,
                known_ids: 0,
            };
        };

        NotificationSnapshot {
            enabled: state.enabled,
            phase: state.phase,
            toasts: state.toasts.to_vec(),
            badge_count: if state.enabled { state.toasts.len() } else { 0 },
            known_ids: state.known.len(),
        }
    }

    /// Subscribe to toast events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    /// Unmount: cancel polling and every pending toast timer.
    ///
    /// The notifier cannot be restarted afterwards.
    pub fn shutdown(&self) {
        if let Ok(mut state) = self.inner.state.lock() {
            state.enabled = false;
            state.phase = PollerPhase::Stopped;
            state.session = None;
            state.timers.clear();
        }
        self.inner.root.cancel();
        tracing::info!("Alert notifier stopped");
    }

    /// Compute and apply the next enabled value under one lock. Returns
    /// `(changed, enabled)`, or `None` once stopped.
    fn update_enabled(&self, next: impl FnOnce(bool) -> bool) -> Option<(bool, bool)> {
        let (changed, enabled) = {
            let Ok(mut state) = self.inner.state.lock() else {
                return None;
            };
            if state.phase == PollerPhase::Stopped {
                return None;
            }

            let enabled = next(state.enabled);
            let changed = state.enabled != enabled;
            state.enabled = enabled;
            if enabled {
                self.begin_session(&mut state);
            } else if let Some(session) = state.session.take() {
                session.cancel();
                state.phase = PollerPhase::Disabled;
            } else {
                state.phase = PollerPhase::Disabled;
            }
            (changed, enabled)
        };

        if changed {
            tracing::info!(enabled, "Alert notifications toggled");
            self.publish(ToastEvent::Toggled { enabled });
        }
        Some((changed, enabled))
    }

    fn begin_session(&self, state: &mut NotifierState) {
        if state.session.is_some() {
            return;
        }

        let token = self.inner.root.child_token();
        state.session_seq += 1;
        state.session = Some(token.clone());
        state.phase = PollerPhase::Priming;

        let seq = state.session_seq;
        let notifier = self.clone();
        tokio::spawn(async move { notifier.run_session(token, seq).await });
    }

    /// Remove a toast and cancel its expiry timer.
    fn remove_toast(&self, id: &str, reason: DismissReason) -> Option<AlertToast> {
        let removed = {
            let Ok(mut state) = self.inner.state.lock() else {
                return None;
            };
            if let Some(timer) = state.timers.remove(id) {
                timer.cancel();
            }
            state.toasts.remove(id)
        };

        if removed.is_some() {
            tracing::debug!(id, ?reason, "Alert toast dismissed");
            self.publish(ToastEvent::Dismissed {
                id: id.to_string(),
                reason,
            });
        }
        removed
    }

    /// Spawn the expiry task for a freshly shown toast.
    fn schedule_expiry(&self, state: &mut NotifierState, id: String) {
        let token = self.inner.root.child_token();
        state.timers.insert(id.clone(), token.clone());

        let notifier = self.clone();
        let lifetime = self.inner.config.toast_lifetime;
        tokio::spawn(async move {
            if sleep_or_cancel(&token, lifetime).await {
                return;
            }
            notifier.remove_toast(&id, DismissReason::Expired);
        });
    }

    fn publish(&self, event: ToastEvent) {
        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }
}
