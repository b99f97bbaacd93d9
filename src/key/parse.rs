//! Key parser
//!
//! Dispatch is purely by segment count: three segments is an access-record
//! key, four is a snapshot key. In lenient mode numeric fields are not range
//! checked and are normalized by the calendar.

use crate::config::ParseMode;
use crate::error::{Error, Result};
use crate::key::data::{KeyData, KeyKind};
use crate::key::time::CalendarFields;
use crate::key::{ACCESS_RECORD_TYPE, INSTANCE_DIGITS, KEY_SUFFIX, ROLLING};

/// Parse a key generated by this codec
pub fn parse_key(key: &str) -> Result<KeyData> {
    parse_key_with_mode(key, ParseMode::Lenient)
}

/// Parse a key, checking fields as strictly as `mode` requires
pub fn parse_key_with_mode(key: &str, mode: ParseMode) -> Result<KeyData> {
    let result = parse_segments(key, mode);

    #[cfg(feature = "tracing")]
    if let Err(ref err) = result {
        tracing::debug!(key, mode = %mode, error = %err, "rejected key");
    }

    result
}

fn parse_segments(key: &str, mode: ParseMode) -> Result<KeyData> {
    let segments: Vec<&str> = key.split('/').collect();
    let kind = KeyKind::from_segment_count(segments.len()).ok_or_else(|| {
        Error::invalid_key(key, format!("expected 3 or 4 segments, found {}", segments.len()))
    })?;
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::invalid_key(key, "empty segment"));
    }

    let (instance, object_type, date, file_name) = match kind {
        KeyKind::AccessRecord => (segments[0], ACCESS_RECORD_TYPE, segments[1], segments[2]),
        KeyKind::Snapshot => (segments[0], segments[1], segments[2], segments[3]),
    };

    if mode.is_strict() && !is_digits(instance, INSTANCE_DIGITS) {
        return Err(Error::invalid_key(key, "instance is not nine digits"));
    }
    let stack_instance_number = instance
        .parse::<u32>()
        .map_err(|e| Error::invalid_key(key, format!("bad instance number: {}", e)))?;

    let fields = parse_fields(key, date, file_name, mode)?;
    let time_ms = fields
        .to_time_ms()
        .map_err(|e| Error::invalid_key(key, e.to_string()))?;

    if mode.is_strict() && !file_name.ends_with(KEY_SUFFIX) {
        return Err(Error::invalid_key(key, format!("file name does not end with {}", KEY_SUFFIX)));
    }

    // The file name is the last segment, so the path is everything before it.
    let path = &key[..key.len() - file_name.len() - 1];

    Ok(KeyData {
        stack_instance_number,
        object_type: object_type.to_string(),
        time_ms,
        path: path.to_string(),
        file_name: file_name.to_string(),
        rolling: file_name.contains(ROLLING),
    })
}

fn parse_fields(key: &str, date: &str, file_name: &str, mode: ParseMode) -> Result<CalendarFields> {
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(Error::invalid_key(key, "date must be YYYY-MM-DD"));
    }

    // Anything past the fourth part is the identifier and rolling marker.
    let time_parts: Vec<&str> = file_name.splitn(5, '-').collect();
    if time_parts.len() < 4 {
        return Err(Error::invalid_key(key, "file name must start with HH-MM-SS-mmm"));
    }

    if mode.is_strict() {
        // Years past 9999 render with more than four digits.
        let year = date_parts[0];
        if year.len() < 4 || !is_digits(year, year.len()) {
            return Err(Error::invalid_key(key, format!("year {:?} is not at least 4 digits", year)));
        }
        let widths = [(date_parts[1], 2), (date_parts[2], 2)]
            .into_iter()
            .chain([(time_parts[0], 2), (time_parts[1], 2), (time_parts[2], 2), (time_parts[3], 3)]);
        for (part, width) in widths {
            if !is_digits(part, width) {
                return Err(Error::invalid_key(key, format!("field {:?} is not {} digits", part, width)));
            }
        }
    }

    let number = |part: &str| {
        part.parse::<i32>()
            .map_err(|e| Error::invalid_key(key, format!("bad number {:?}: {}", part, e)))
    };

    let fields = CalendarFields {
        year: number(date_parts[0])?,
        month: number(date_parts[1])?,
        day: number(date_parts[2])?,
        hour: number(time_parts[0])?,
        minute: number(time_parts[1])?,
        second: number(time_parts[2])?,
        millisecond: number(time_parts[3])?,
    };

    if mode.is_strict() && !fields.is_normalized() {
        return Err(Error::invalid_key(key, "date or time field out of range"));
    }

    Ok(fields)
}

fn is_digits(part: &str, width: usize) -> bool {
    part.len() == width && part.bytes().all(|b| b.is_ascii_digit())
}
