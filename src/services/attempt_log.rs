use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::db::queries;
use crate::models::LogEntry;

/// Sink for send attempts. Recording is best-effort and never fails the send.
#[async_trait]
pub trait AttemptLogger: Send + Sync {
    async fn record(&self, entry: LogEntry);
}

/// Writes attempts to the `sms_logs` table.
pub struct SqliteAttemptLogger {
    db: Arc<Mutex<Connection>>,
}

impl SqliteAttemptLogger {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttemptLogger for SqliteAttemptLogger {
    async fn record(&self, entry: LogEntry) {
        let Ok(db) = self.db.lock() else {
            tracing::debug!("sms log connection poisoned, dropping attempt");
            return;
        };
        if let Err(e) = queries::insert_sms_log(
            &db,
            entry.phone.as_deref(),
            entry.text.as_deref(),
            &entry.payload,
            entry.success,
        ) {
            tracing::debug!(error = %e, "failed to store sms attempt");
        }
    }
}

pub struct NoopAttemptLogger;

#[async_trait]
impl AttemptLogger for NoopAttemptLogger {
    async fn record(&self, _entry: LogEntry) {}
}
