pub mod attempt_log;
pub mod messaging;
