use std::fmt;

use serde_json::json;

use super::fields::{FieldsMap, SuccessCheck};

/// Supported SMS gates. Every gate shares the send algorithm in
/// `SmsHandler` and differs only by its fields map and config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// https://smsc.ru/api/
    Smsc,
    /// https://www.smstraffic.ru/
    SmsTraffic,
}

impl Gate {
    pub const ALL: [Gate; 2] = [Gate::Smsc, Gate::SmsTraffic];

    /// Provider name, also the key of the gate's settings in `SMS_GATES`.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Smsc => "SMSC",
            Gate::SmsTraffic => "SMSTraffic",
        }
    }

    pub fn handler_name(&self) -> String {
        format!("{}{}", self.name(), super::registry::HANDLER_SUFFIX)
    }

    pub fn fields_map(&self) -> FieldsMap {
        match self {
            Gate::Smsc => FieldsMap {
                user: "login",
                password: "psw",
                phone: "phones",
                message: "mes",
                check_success: SuccessCheck {
                    field: "cnt",
                    expected: json!(1),
                },
            },
            Gate::SmsTraffic => FieldsMap {
                user: "username",
                password: "passwd",
                phone: "phone",
                message: "message",
                check_success: SuccessCheck {
                    field: "status",
                    expected: json!("ok"),
                },
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
