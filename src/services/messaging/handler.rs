use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use super::fields::{value_text, FieldsMap};
use super::gate::Gate;
use crate::config::{GateConfig, DEFAULT_HTTP_TIMEOUT};
use crate::errors::SendError;
use crate::models::LogEntry;
use crate::services::attempt_log::AttemptLogger;

/// Parsed gate response on success, error descriptor otherwise.
pub type SendResult = Result<Value, SendError>;

const CONFIG_EMPTY: &str = "Handler property: config is empty";
const CONFIG_INCOMPLETE: &str =
    "Invalid handler property: config. HOST, USER or PASSWORD are not configured";
const FIELDS_MAP_INVALID: &str = "Invalid handler property: fields_map";
const INPUT_MISSING: &str = "Phone number or message are not specified";
const PARSE_FAILED: &str = "Failed to parse response from gate";

#[derive(Clone)]
pub struct SmsHandler {
    gate: Gate,
    fields: FieldsMap,
    config: Option<GateConfig>,
    client: reqwest::Client,
    logger: Arc<dyn AttemptLogger>,
}

struct GateRequest<'a> {
    host: &'a str,
    params: BTreeMap<String, String>,
}

impl SmsHandler {
    /// Handler with a client bounded by `DEFAULT_HTTP_TIMEOUT`. Use
    /// `with_client` to supply a client with another timeout.
    pub fn new(gate: Gate, config: Option<GateConfig>, logger: Arc<dyn AttemptLogger>) -> Self {
        Self {
            gate,
            fields: gate.fields_map(),
            config,
            client: default_client(),
            logger,
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_fields_map(mut self, fields: FieldsMap) -> Self {
        self.fields = fields;
        self
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Sends one message through the gate and records the attempt.
    ///
    /// Exactly one request is made (none when validation fails) and exactly
    /// one `LogEntry` is recorded, whatever the outcome. Its payload is the
    /// response body JSON on success and the error descriptor JSON on failure.
    pub async fn send(&self, phone: &str, message: &str) -> SendResult {
        let result = self.try_send(phone, message).await;

        let handler = self.gate.handler_name();
        let masked = mask_phone_number(phone);
        let payload = match &result {
            Ok(body) => {
                tracing::info!(handler = %handler, phone = %masked, "SMS was sent");
                body.to_string()
            }
            Err(e) => {
                tracing::error!(
                    handler = %handler,
                    phone = %masked,
                    kind = e.kind(),
                    error = %e,
                    "SMS wasn't sent"
                );
                e.descriptor().to_string()
            }
        };

        self.logger
            .record(LogEntry {
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                text: Some(message.to_string()),
                payload,
                success: result.is_ok(),
            })
            .await;

        result
    }

    async fn try_send(&self, phone: &str, message: &str) -> SendResult {
        let request = self.build_request(phone, message)?;
        let body = self.dispatch(&request).await?;
        self.parse_response(&body)
    }

    fn build_request<'a>(
        &'a self,
        phone: &str,
        message: &str,
    ) -> Result<GateRequest<'a>, SendError> {
        let config = match &self.config {
            Some(config) if !config.is_empty() => config,
            _ => return Err(SendError::Config(CONFIG_EMPTY.to_string())),
        };
        let (Some(host), Some(user), Some(password)) = (
            non_empty(&config.host),
            non_empty(&config.user),
            non_empty(&config.password),
        ) else {
            return Err(SendError::Config(CONFIG_INCOMPLETE.to_string()));
        };
        if !self.fields.is_valid() {
            return Err(SendError::Config(FIELDS_MAP_INVALID.to_string()));
        }
        if phone.is_empty() || message.is_empty() {
            return Err(SendError::Input(INPUT_MISSING.to_string()));
        }

        let mut params = BTreeMap::new();
        params.insert(self.fields.user.to_string(), user.to_string());
        params.insert(self.fields.password.to_string(), password.to_string());
        params.insert(self.fields.phone.to_string(), phone.to_string());
        params.insert(self.fields.message.to_string(), message.to_string());
        for (key, value) in &config.params {
            params.insert(key.clone(), value_text(value));
        }

        Ok(GateRequest { host, params })
    }

    async fn dispatch(&self, request: &GateRequest<'_>) -> Result<String, SendError> {
        let response = self
            .client
            .post(request.host)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| SendError::Transport {
                status: None,
                message: format!("Failed to send sms: {e}"),
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(SendError::Transport {
                status: Some(status),
                message: format!("Failed to send sms, request status code: {status}"),
            });
        }

        response.text().await.map_err(|e| SendError::Transport {
            status: Some(status),
            message: format!("Failed to read response from gate: {e}"),
        })
    }

    fn parse_response(&self, body: &str) -> SendResult {
        let body: Value =
            serde_json::from_str(body).map_err(|_| SendError::Parse(PARSE_FAILED.to_string()))?;

        let check = &self.fields.check_success;
        if !check.matches(&body) {
            let expected = match &check.expected {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(SendError::GateRejected {
                field: check.field.to_string(),
                expected,
            });
        }
        Ok(body)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_HTTP_TIMEOUT)
        .build()
        // build fails only where Client::new would panic (TLS backend init)
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Hides all but the last four characters of a phone number for trace output.
pub fn mask_phone_number(phone: &str) -> String {
    let count = phone.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = phone.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), visible)
}
