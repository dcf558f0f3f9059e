//! Capped, newest-first stack of visible toasts.

use std::collections::VecDeque;

use crate::types::AlertToast;

/// Result of admitting one poll cycle's toasts.
#[derive(Debug, Default)]
pub struct CycleOutcome {
    /// Toasts now visible, in display order.
    pub shown: Vec<AlertToast>,
    /// Previously visible toasts pushed out by the cap.
    pub evicted: Vec<AlertToast>,
}

/// Visible toasts, newest first.
#[derive(Debug)]
pub struct ToastQueue {
    entries: VecDeque<AlertToast>,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        let max_visible = max_visible.max(1);
        Self {
            entries: VecDeque::with_capacity(max_visible + 1),
            max_visible,
        }
    }

    /// Prepend up to `max_new` toasts in detection order, then truncate to
    /// the visible cap. Truncation drops the oldest-displayed entries.
    pub fn push_cycle(&mut self, detected: Vec<AlertToast>, max_new: usize) -> CycleOutcome {
        let admitted: Vec<AlertToast> = detected.into_iter().take(max_new).collect();
        if admitted.is_empty() {
            return CycleOutcome::default();
        }

        for toast in admitted.iter().rev() {
            self.entries.push_front(toast.clone());
        }

        let mut evicted = Vec::new();
        if self.entries.len() > self.max_visible {
            let dropped = self.entries.split_off(self.max_visible);
            // Admitted toasts that did not fit were never visible.
            evicted = dropped
                .into_iter()
                .skip(admitted.len().saturating_sub(self.max_visible))
                .collect();
        }

        let shown = admitted.into_iter().take(self.max_visible).collect();
        CycleOutcome { shown, evicted }
    }

    /// Remove a toast by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<AlertToast> {
        let index = self.entries.iter().position(|t| t.id == id)?;
        self.entries.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertToast> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<AlertToast> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
