//! Listing prefixes and date extractors
//!
//! The key-based extractors read fixed segment positions and are only
//! meaningful on access-record keys: on a snapshot key segment 1 is the type,
//! not the date. Callers that may see both layouts must dispatch on
//! segment count first.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::key::format::create_key;
use crate::key::time::CalendarFields;

/// Get the prefix covering every key of a stack instance
pub fn instance_prefix(instance: u32) -> String {
    format!("{:09}", instance)
}

/// Get the prefix covering every snapshot of one type from a stack instance
pub fn instance_and_type_prefix(instance: u32, object_type: &str) -> String {
    format!("{:09}/{}", instance, object_type)
}

/// Format a date as `YYYY-MM-DD` (month is 1-based)
pub fn date_string(year: i32, month: i32, day: i32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Get the UTC date string of an instant
pub fn date_string_from_time_ms(time_ms: i64) -> Result<String> {
    let fields = CalendarFields::from_time_ms(time_ms)?;
    Ok(date_string(fields.year, fields.month, fields.day))
}

/// Extract the date segment from an access-record key
pub fn date_string_from_key(key: &str) -> Result<&str> {
    segment(key, 1)
}

/// Extract `YYYY-MM-DD/HH` from an access-record key
pub fn date_and_hour_from_key(key: &str) -> Result<String> {
    let date = segment(key, 1)?;
    let file_name = segment(key, 2)?;
    // First two characters, not bytes.
    let hour = match file_name.char_indices().nth(2) {
        Some((end, _)) => &file_name[..end],
        None if file_name.chars().count() == 2 => file_name,
        None => return Err(Error::invalid_key(key, "file name has no hour field")),
    };
    Ok(format!("{}/{}", date, hour))
}

/// Get `YYYY-MM-DD/HH` for an instant, as it would appear in a key
pub fn date_and_hour_from_time_ms(time_ms: i64) -> Result<String> {
    let fields = CalendarFields::from_time_ms(time_ms)?;
    let key = create_key(1, None, &fields, &Uuid::nil().hyphenated().to_string(), false);
    date_and_hour_from_key(&key)
}

fn segment(key: &str, index: usize) -> Result<&str> {
    key.split('/')
        .nth(index)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| Error::invalid_key(key, format!("missing segment {}", index)))
}
