use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, SecondsFormat, Utc};

pub(crate) const BRIEF_BODY_CHARS: usize = 80;

/// Current time as the store expects it, e.g. `2024-01-01T00:00:00.000Z`.
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn now_local() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// One-line preview of a note body for the list pane.
pub(crate) fn brief_body(body: &str, max_chars: usize) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push('…');
    out
}

/// Friendly timestamp for the list pane, relative to `now` and in its offset.
///
/// Anything that isn't RFC 3339 is shown as-is.
pub(crate) fn format_datetime(raw: &str, now: DateTime<FixedOffset>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) else {
        return raw.to_string();
    };
    let ts = parsed.with_timezone(&now.timezone());

    let elapsed = now.signed_duration_since(ts);
    if elapsed >= Duration::zero() && elapsed < Duration::minutes(1) {
        return "刚刚".to_string();
    }

    let hm = ts.format("%H:%M");
    match (now.date_naive() - ts.date_naive()).num_days() {
        0 => format!("今天 {hm}"),
        1 => format!("昨天 {hm}"),
        2 => format!("前天 {hm}"),
        _ if ts.year() == now.year() => format!("{}月{}日 {hm}", ts.month(), ts.day()),
        _ => format!("{}年{}月{}日 {hm}", ts.year(), ts.month(), ts.day()),
    }
}
