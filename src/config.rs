use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Gate request timeout when `SMS_HTTP_TIMEOUT_SECS` is unset.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for one gate, keyed by gate name in `SMS_GATES`.
///
/// ```json
/// "SMSC": {
///     "HOST": "http://smsc.ru/sys/send.php",
///     "USER": "guest",
///     "PASSWORD": "guest",
///     "PARAMS": {"fmt": 3, "charset": "utf-8"}
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct GateConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl GateConfig {
    pub fn new(host: &str, user: &str, password: &str) -> Self {
        Self {
            host: Some(host.to_string()),
            user: Some(user.to_string()),
            password: Some(password.to_string()),
            params: serde_json::Map::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.user.is_none() && self.password.is_none() && self.params.is_empty()
    }
}

pub type GatesConfig = HashMap<String, GateConfig>;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub http_timeout: Duration,
    pub gates: GatesConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let http_timeout = env::var("SMS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);

        let gates = match env::var("SMS_GATES") {
            Ok(raw) => parse_gates(&raw).context("invalid SMS_GATES")?,
            Err(_) => match env::var("SMS_GATES_FILE") {
                Ok(path) => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read gates file: {path}"))?;
                    parse_gates(&raw).with_context(|| format!("invalid gates file: {path}"))?
                }
                Err(_) => {
                    tracing::warn!("neither SMS_GATES nor SMS_GATES_FILE is set, no gates configured");
                    GatesConfig::new()
                }
            },
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "smsgate.db".to_string()),
            http_timeout,
            gates,
        })
    }

    pub fn gate(&self, name: &str) -> Option<GateConfig> {
        self.gates.get(name).cloned()
    }
}

pub fn parse_gates(raw: &str) -> anyhow::Result<GatesConfig> {
    serde_json::from_str(raw).context("gates config must be a JSON object of gate settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gates() {
        let raw = r#"{
            "SMSC": {
                "HOST": "http://smsc.ru/sys/send.php",
                "USER": "guest",
                "PASSWORD": "secret",
                "PARAMS": {"fmt": 3, "charset": "utf-8"}
            },
            "SMSTraffic": {"HOST": "http://smstraffic.ru/superapi/message/"}
        }"#;

        let gates = parse_gates(raw).unwrap();
        let smsc = &gates["SMSC"];
        assert_eq!(smsc.host.as_deref(), Some("http://smsc.ru/sys/send.php"));
        assert_eq!(smsc.user.as_deref(), Some("guest"));
        assert_eq!(smsc.params["fmt"], 3);
        assert_eq!(smsc.params["charset"], "utf-8");

        let traffic = &gates["SMSTraffic"];
        assert!(traffic.user.is_none());
        assert!(traffic.params.is_empty());
    }

    #[test]
    fn test_parse_gates_rejects_garbage() {
        assert!(parse_gates("[1, 2]").is_err());
        assert!(parse_gates("not json").is_err());
    }

    #[test]
    fn test_empty_gate_config() {
        let cfg: GateConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.is_empty());
        assert!(!GateConfig::new("http://h", "u", "p").is_empty());
        assert!(!GateConfig::default().with_param("charset", "utf-8").is_empty());
    }
}
