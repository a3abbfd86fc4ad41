use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::models::{NormalizedTask, Priority, RawRecord, TaskKind};

use super::ownership;

/// Days added to the start date when a record has no due date.
pub const DEFAULT_DUE_OFFSET_DAYS: i64 = 3;

const STATUS_PRIORITY: &[(&str, Priority)] = &[
    ("Não iniciada", Priority::Low),
    ("Backlog", Priority::Medium),
    ("Em Produção", Priority::High),
];

/// Priority for a workflow status label; unknown labels are medium.
pub fn priority_for_status(status: Option<&str>) -> Priority {
    status
        .and_then(|s| STATUS_PRIORITY.iter().find(|(label, _)| *label == s))
        .map(|(_, priority)| *priority)
        .unwrap_or(Priority::Medium)
}

/// Parse the timestamp forms found in task exports. Plain dates are taken
/// as midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn date_field(raw: &RawRecord, key: &str) -> Option<DateTime<Utc>> {
    let value = raw.text(key)?;
    let parsed = parse_timestamp(&value);
    if parsed.is_none() {
        debug!(field = key, value = %value, "unparseable date, using default");
    }
    parsed
}

/// Turn one raw record into a normalized task. Total: every missing or
/// malformed field falls back to its default.
pub fn normalize(raw: &RawRecord, now: DateTime<Utc>) -> NormalizedTask {
    let status_label = raw.text("PipelineStepTitle").or_else(|| raw.text("status"));
    let priority = priority_for_status(status_label.as_deref());

    let owner_full_path = raw.raw_text("group_subgroup").unwrap_or_default().to_string();
    let owner_group = ownership::resolve_group(&owner_full_path);

    let start_date = date_field(raw, "start").unwrap_or(now);
    let due_date = date_field(raw, "end").unwrap_or_else(|| {
        start_date
            .checked_add_signed(Duration::days(DEFAULT_DUE_OFFSET_DAYS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    });

    NormalizedTask {
        client: raw.text("client"),
        project: raw.text("project"),
        name: raw.text("name"),
        responsible: raw.text("responsible"),
        kind: TaskKind::from_marker(raw.text("tipo").as_deref()),
        start_date,
        due_date,
        status_label,
        priority,
        owner_group,
        owner_full_path,
    }
}

pub fn normalize_all(raws: &[RawRecord], now: DateTime<Utc>) -> Vec<NormalizedTask> {
    raws.iter().map(|raw| normalize(raw, now)).collect()
}
