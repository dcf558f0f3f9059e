use chrono::Utc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

use super::*;
use crate::identity::{identify, toast_from_record};

impl Notifier {
    /// One enabled run: prime, wait out the startup delay, then poll.
    pub(super) async fn run_session(self, token: CancellationToken, seq: u64) {
        let config = self.inner.config.clone();
        let first_poll = Instant::now() + config.startup_delay;
        tracing::info!(
            startup_delay_secs = config.startup_delay.as_secs(),
            poll_interval_secs = config.poll_interval.as_secs(),
            "Alert notifier session started"
        );

        tokio::select! {
            biased;
            _ = token.cancelled() => return,
            _ = self.prime(config.prime_limit) => {}
        }
        self.set_phase(seq, PollerPhase::Waiting);

        let mut ticker = interval_at(first_poll, config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }
            self.set_phase(seq, PollerPhase::Polling);

            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = self.poll_once(&token, config.poll_limit) => {}
            }
        }

        tracing::info!("Alert notifier session ended");
    }

    /// Seed the known ids with the alerts that are already active.
    ///
    /// Never produces toasts. Fetch errors are ignored: the set simply stays
    /// as it was.
    async fn prime(&self, limit: u32) {
        let records = match self.inner.source.active_alerts(limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(error = %e, "Alert priming fetch failed, ignoring");
                return;
            }
        };

        let Ok(mut state) = self.inner.state.lock() else {
            return;
        };
        state.known.extend(records.iter().filter_map(identify));
        tracing::debug!(
            fetched = records.len(),
            known = state.known.len(),
            "Known alert ids primed"
        );
    }

    /// One poll cycle: fetch, detect unseen ids, show up to the cycle cap.
    ///
    /// Fetch errors are ignored and produce no toasts this cycle.
    pub(super) async fn poll_once(&self, token: &CancellationToken, limit: u32) {
        let records = match self.inner.source.active_alerts(limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(error = %e, "Alert poll failed, ignoring");
                return;
            }
        };

        let mut events = Vec::new();
        {
            let Ok(mut state) = self.inner.state.lock() else {
                return;
            };
            // Disabled while the fetch was in flight.
            if token.is_cancelled() {
                return;
            }

            let now = Utc::now();
            let mut detected = Vec::new();
            for record in &records {
                let Some(id) = identify(record) else {
                    tracing::debug!(?record, "Skipping alert without identity");
                    continue;
                };
                if state.known.insert(id.clone()) {
                    detected.push(toast_from_record(id, record, now));
                }
            }
            if detected.is_empty() {
                return;
            }

            let max_new = self.inner.config.max_new_per_cycle;
            let outcome = state.toasts.push_cycle(detected, max_new);

            for toast in &outcome.evicted {
                if let Some(timer) = state.timers.remove(&toast.id) {
                    timer.cancel();
                }
                events.push(ToastEvent::Dismissed {
                    id: toast.id.clone(),
                    reason: DismissReason::Evicted,
                });
            }
            for toast in outcome.shown {
                tracing::info!(
                    id = %toast.id,
                    severity = toast.severity.as_str(),
                    patient = toast.patient_name.as_deref().unwrap_or(""),
                    "New alert toast"
                );
                self.schedule_expiry(&mut state, toast.id.clone());
                events.push(ToastEvent::Shown { toast });
            }
        }

        for event in events {
            self.publish(event);
        }
    }

    fn set_phase(&self, seq: u64, phase: PollerPhase) {
        let Ok(mut state) = self.inner.state.lock() else {
            return;
        };
        if state.session_seq == seq && state.session.is_some() {
            state.phase = phase;
        }
    }
}
