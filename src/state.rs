use std::sync::{Arc, Mutex};

use anyhow::Context;
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::errors::RegistryError;
use crate::services::attempt_log::{AttemptLogger, SqliteAttemptLogger};
use crate::services::messaging::{HandlerRegistry, SmsHandler};

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub registry: HandlerRegistry,
    pub logger: Arc<dyn AttemptLogger>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig, conn: Connection) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("failed to build gate http client")?;
        let db = Arc::new(Mutex::new(conn));

        Ok(Self {
            logger: Arc::new(SqliteAttemptLogger::new(Arc::clone(&db))),
            db,
            config,
            registry: HandlerRegistry::with_defaults(),
            client,
        })
    }

    /// Resolves `name` and wires the gate to its configured settings.
    pub fn handler(&self, name: &str) -> Result<SmsHandler, RegistryError> {
        let gate = self.registry.resolve(name)?;
        Ok(
            SmsHandler::new(gate, self.config.gate(gate.name()), Arc::clone(&self.logger))
                .with_client(self.client.clone()),
        )
    }
}
