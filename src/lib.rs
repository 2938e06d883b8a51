pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

pub use config::{AppConfig, GateConfig};
pub use errors::{RegistryError, SendError};
pub use services::attempt_log::{AttemptLogger, NoopAttemptLogger, SqliteAttemptLogger};
pub use services::messaging::{Gate, HandlerRegistry, SendResult, SmsHandler};
