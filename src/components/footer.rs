use chrono::{DateTime, Datelike, TimeZone};

/// Calendar year shown in the footer.
pub fn year_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}
