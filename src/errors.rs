use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Input(String),

    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    #[error("{0}")]
    Parse(String),

    #[error("Failed to send sms, field \"{field}\" != \"{expected}\"")]
    GateRejected { field: String, expected: String },
}

impl SendError {
    pub fn kind(&self) -> &'static str {
        match self {
            SendError::Config(_) => "config",
            SendError::Input(_) => "input",
            SendError::Transport { .. } => "transport",
            SendError::Parse(_) => "parse",
            SendError::GateRejected { .. } => "gate_rejected",
        }
    }

    /// Structured form handed back to callers and printed by the CLI.
    pub fn descriptor(&self) -> Value {
        let mut descriptor = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let SendError::Transport {
            status: Some(status),
            ..
        } = self
        {
            descriptor["status"] = json!(status);
        }
        descriptor
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("Handler: {0} not found")]
    UnknownHandler(String),
}
