use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

const VIETNAM_OFFSET_SECS: i32 = 7 * 3600;

/// Labels and date rendering used when building display rows.
#[derive(Debug, Clone)]
pub struct Locale {
    pub walk_in_label: String,
    pub missing_code_label: String,
    pub date_format: String,
    pub utc_offset: FixedOffset,
}

impl Locale {
    pub fn vietnamese() -> Self {
        Self {
            walk_in_label: "Khách vãng lai".to_owned(),
            missing_code_label: "N/A".to_owned(),
            date_format: "%-d/%-m/%Y".to_owned(),
            utc_offset: FixedOffset::east_opt(VIETNAM_OFFSET_SECS).unwrap_or(Utc.fix()),
        }
    }

    /// Calendar date of `timestamp` as seen in this locale's offset.
    pub fn format_date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.utc_offset)
            .format(&self.date_format)
            .to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::vietnamese()
    }
}

/// Parses backend timestamps. Values without an offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
