use ammonia::Builder;
use chrono::{DateTime, NaiveDateTime};
use std::collections::HashMap;

pub fn format_time(time_in_seconds: f64) -> String {
    let time_in_seconds = if time_in_seconds.is_finite() {
        time_in_seconds.max(0.0)
    } else {
        0.0
    };
    let hours = (time_in_seconds / 3600.0).floor() as i32;
    let minutes = ((time_in_seconds % 3600.0) / 60.0).floor() as i32;
    let seconds = (time_in_seconds % 60.0).floor() as i32;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats an API timestamp as `8 Jan 21`. Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`;
/// anything else is returned unchanged.
pub fn format_published_date(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|date| date.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"));

    match parsed {
        Ok(date) => date.format("%-d %b %y").to_string(),
        Err(e) => {
            log::warn!("Unrecognised publication date {:?}: {}", raw, e);
            raw.to_string()
        }
    }
}

/// Cleans episode show notes and makes every link open in a new tab.
pub fn sanitize_html_with_blank_target(description: &str) -> String {
    let mut attribute_values = HashMap::new();
    attribute_values.insert("target", "_blank");

    let mut tag_attribute_values = HashMap::new();
    tag_attribute_values.insert("a", attribute_values);

    let mut builder = Builder::default();
    builder.set_tag_attribute_values(tag_attribute_values);
    builder.clean(description).to_string()
}
