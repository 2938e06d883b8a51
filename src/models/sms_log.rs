use serde::{Deserialize, Serialize};

/// One send attempt as handed to an `AttemptLogger`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub phone: Option<String>,
    pub text: Option<String>,
    pub payload: String,
    pub success: bool,
}

/// Row of the `sms_logs` table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmsLog {
    pub id: i64,
    pub phone: Option<String>,
    pub text: Option<String>,
    pub payload: String,
    pub success: bool,
    pub created: String,
}
