use chrono::Utc;
use rusqlite::{params, Connection};

use crate::models::SmsLog;

pub const PHONE_MAX_CHARS: usize = 64;
pub const TEXT_MAX_CHARS: usize = 64;
pub const PAYLOAD_MAX_CHARS: usize = 512;

// ── SMS logs ──

/// Appends one attempt. Over-long columns are cut to their bound, never rejected.
pub fn insert_sms_log(
    conn: &Connection,
    phone: Option<&str>,
    text: Option<&str>,
    payload: &str,
    success: bool,
) -> anyhow::Result<i64> {
    let created = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO sms_logs (phone, text, payload, success, created) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            phone.map(|p| truncate_chars(p, PHONE_MAX_CHARS)),
            text.map(|t| truncate_chars(t, TEXT_MAX_CHARS)),
            truncate_chars(payload, PAYLOAD_MAX_CHARS),
            success,
            created,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn recent_sms_logs(conn: &Connection, limit: i64) -> anyhow::Result<Vec<SmsLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, phone, text, payload, success, created FROM sms_logs ORDER BY id DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        Ok(SmsLog {
            id: row.get(0)?,
            phone: row.get(1)?,
            text: row.get(2)?,
            payload: row.get(3)?,
            success: row.get(4)?,
            created: row.get(5)?,
        })
    })?;

    let mut logs = vec![];
    for row in rows {
        logs.push(row?);
    }
    Ok(logs)
}

pub fn count_sms_logs(conn: &Connection) -> anyhow::Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM sms_logs", [], |row| row.get(0))?;
    Ok(count)
}

fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
