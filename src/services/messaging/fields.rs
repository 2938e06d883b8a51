use serde_json::Value;

/// Response field a gate sets on success, and the value it must hold.
#[derive(Clone, Debug, PartialEq)]
pub struct SuccessCheck {
    pub field: &'static str,
    pub expected: Value,
}

impl SuccessCheck {
    /// Exact JSON comparison: `1` matches neither `"1"`, `1.0` nor `true`.
    /// A missing field reads as `null`.
    pub fn matches(&self, body: &Value) -> bool {
        body.get(self.field).unwrap_or(&Value::Null) == &self.expected
    }
}

/// Request parameter names a gate uses for the generic send vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsMap {
    pub user: &'static str,
    pub password: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub check_success: SuccessCheck,
}

impl FieldsMap {
    pub fn is_valid(&self) -> bool {
        [
            self.user,
            self.password,
            self.phone,
            self.message,
            self.check_success.field,
        ]
        .iter()
        .all(|name| !name.trim().is_empty())
    }
}

/// Plain text form of a JSON value: strings verbatim, anything else as JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
