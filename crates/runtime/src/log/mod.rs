//! In-memory event log with pub/sub and optional persistence.
//!
//! [`LogManager`] is a cheap clonable handle; every clone appends to and
//! reads from the same ring buffer. Subscribers receive each new entry through
//! a tokio broadcast channel. When persistence is enabled the whole buffer is
//! written to [`Storage`] after every change. Persistence failures are traced
//! and otherwise ignored.
mod entry;
mod export;

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::json;
use tokio::sync::broadcast;

pub use entry::{LogEntry, LogKind, LogOptions};
pub use export::ExportFormat;

use crate::error::Result;
use crate::repository::{Storage, StorageExt};

/// Number of entries [`LogManager::recent`] callers usually ask for.
pub const DEFAULT_RECENT_COUNT: usize = 50;

const SUBSCRIPTION_CAPACITY: usize = 256;

#[derive(Clone)]
pub struct LogManager {
    inner: Arc<Inner>,
}

struct Inner {
    options: LogOptions,
    logs: RwLock<VecDeque<LogEntry>>,
    sender: broadcast::Sender<LogEntry>,
    storage: Option<Arc<dyn Storage>>,
}

impl LogManager {
    /// Creates a log that never touches storage.
    pub fn new(options: LogOptions) -> Self {
        Self::build(options, None)
    }

    /// Creates a log backed by `storage`. Previously persisted entries are
    /// restored when persistence is enabled.
    pub fn with_storage(options: LogOptions, storage: Arc<dyn Storage>) -> Self {
        let manager = Self::build(options, Some(storage));
        if manager.inner.options.persist_logs {
            manager.load_persisted();
        }
        manager
    }

    fn build(options: LogOptions, storage: Option<Arc<dyn Storage>>) -> Self {
        let (sender, _) = broadcast::channel(SUBSCRIPTION_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                logs: RwLock::new(VecDeque::with_capacity(options.max_logs.min(1024))),
                options,
                sender,
                storage,
            }),
        }
    }

    pub fn options(&self) -> &LogOptions {
        &self.inner.options
    }

    /// Appends an entry, evicting the oldest one at capacity.
    pub fn add_log(
        &self,
        kind: LogKind,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> LogEntry {
        let entry = LogEntry::new(kind, message, data);
        tracing::debug!(kind = %entry.kind, "{}", entry.message);

        {
            let mut logs = self.write_logs();
            let max = self.inner.options.max_logs;
            if max > 0 {
                while logs.len() >= max {
                    logs.pop_front();
                }
                logs.push_back(entry.clone());
            }
        }

        // No subscribers is fine.
        let _ = self.inner.sender.send(entry.clone());

        if self.inner.options.persist_logs {
            self.persist();
        }
        entry
    }

    /// Subscribes to entries added from now on. Dropping the subscription
    /// unsubscribes.
    pub fn subscribe(&self) -> LogSubscription {
        LogSubscription {
            receiver: self.inner.sender.subscribe(),
        }
    }

    // ===== helpers =====

    pub fn log_interaction(&self, action: &str, details: serde_json::Value) -> LogEntry {
        self.add_log(LogKind::Interaction, action, details)
    }

    pub fn log_inventory(&self, action: &str, item: &str, quantity: u32) -> LogEntry {
        self.add_log(
            LogKind::Inventory,
            format!("{}: {} (x{})", action, item, quantity),
            json!({ "item": item, "quantity": quantity }),
        )
    }

    pub fn log_profile_update(&self, field: &str, value: &str) -> LogEntry {
        self.add_log(
            LogKind::Profile,
            format!("Updated {}", field),
            json!({ "field": field, "value": value }),
        )
    }

    pub fn log_system_event(&self, event: impl Into<String>) -> LogEntry {
        self.add_log(LogKind::System, event, json!({}))
    }

    pub fn log_combat(&self, action: &str, details: serde_json::Value) -> LogEntry {
        self.add_log(LogKind::Combat, action, details)
    }

    // ===== queries =====

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<LogEntry> {
        let logs = self.read_logs();
        let skip = logs.len().saturating_sub(count);
        logs.iter().skip(skip).cloned().collect()
    }

    /// Entries of one kind, optionally only the last `count` of them.
    pub fn by_kind(&self, kind: LogKind, count: Option<usize>) -> Vec<LogEntry> {
        let logs = self.read_logs();
        let matching: Vec<LogEntry> = logs.iter().filter(|e| e.kind == kind).cloned().collect();
        match count {
            Some(count) => {
                let skip = matching.len().saturating_sub(count);
                matching.into_iter().skip(skip).collect()
            }
            None => matching,
        }
    }

    pub fn search(&self, query: &str) -> Vec<LogEntry> {
        self.read_logs()
            .iter()
            .filter(|entry| entry.matches(query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read_logs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_logs().is_empty()
    }

    /// Removes every entry, or only entries of `kind`.
    pub fn clear(&self, kind: Option<LogKind>) {
        {
            let mut logs = self.write_logs();
            match kind {
                Some(kind) => logs.retain(|entry| entry.kind != kind),
                None => logs.clear(),
            }
        }
        if self.inner.options.persist_logs {
            self.persist();
        }
    }

    pub fn export(&self, format: ExportFormat) -> Result<String> {
        export::render(format, self.read_logs().iter())
    }

    // ===== persistence =====

    fn persist(&self) {
        let Some(storage) = &self.inner.storage else {
            return;
        };
        let logs = self.read_logs();
        let entries: Vec<&LogEntry> = logs.iter().collect();
        if let Err(error) = storage.set_json(&self.inner.options.storage_key, &entries) {
            tracing::warn!(%error, "Failed to persist logs");
        }
    }

    fn load_persisted(&self) {
        let Some(storage) = &self.inner.storage else {
            return;
        };
        match storage.get_json::<Vec<LogEntry>>(&self.inner.options.storage_key) {
            Ok(Some(entries)) => {
                let mut logs = self.write_logs();
                let skip = entries.len().saturating_sub(self.inner.options.max_logs);
                logs.extend(entries.into_iter().skip(skip));
                tracing::debug!(count = logs.len(), "Restored persisted logs");
            }
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "Failed to load persisted logs"),
        }
    }

    fn read_logs(&self) -> std::sync::RwLockReadGuard<'_, VecDeque<LogEntry>> {
        self.inner.logs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_logs(&self) -> std::sync::RwLockWriteGuard<'_, VecDeque<LogEntry>> {
        self.inner.logs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new(LogOptions::default())
    }
}

/// Receiving end of [`LogManager::subscribe`].
pub struct LogSubscription {
    receiver: broadcast::Receiver<LogEntry>,
}

impl LogSubscription {
    /// Waits for the next entry. Returns `None` once every manager handle is
    /// gone. Entries missed by a lagging subscriber are skipped.
    pub async fn recv(&mut self) -> Option<LogEntry> {
        loop {
            match self.receiver.recv().await {
                Ok(entry) => return Some(entry),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Log subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns an already queued entry without waiting.
    pub fn try_recv(&mut self) -> Option<LogEntry> {
        loop {
            match self.receiver.try_recv() {
                Ok(entry) => return Some(entry),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Log subscriber lagged");
                }
                Err(_) => return None,
            }
        }
    }
}
