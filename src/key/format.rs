//! Key formatter
//!
//! Builds access-record and snapshot keys from a stack instance, an optional
//! object type and an instant.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::key::prefix::{date_string, instance_and_type_prefix, instance_prefix};
use crate::key::time::CalendarFields;
use crate::key::{INSTANCE_LIMIT, KEY_SUFFIX, ROLLING};

/// Create a new access-record key with a fresh random identifier
pub fn create_new_access_record_key(instance: u32, time_ms: i64, rolling: bool) -> Result<String> {
    create_new_key(instance, None, time_ms, rolling)
}

/// Create a new key with a fresh random identifier
///
/// Without a type this is an access-record key
/// (`III/YYYY-MM-DD/HH-MM-SS-mmm-UUID[-rolling].csv.gz`), with one it is a
/// snapshot key (`III/TYPE/YYYY-MM-DD/HH-MM-SS-mmm-UUID[-rolling].csv.gz`).
pub fn create_new_key(
    instance: u32,
    object_type: Option<&str>,
    time_ms: i64,
    rolling: bool,
) -> Result<String> {
    generate_key(instance, object_type, time_ms, rolling, true)
}

pub(crate) fn generate_key(
    instance: u32,
    object_type: Option<&str>,
    time_ms: i64,
    rolling: bool,
    check_inputs: bool,
) -> Result<String> {
    if check_inputs {
        check_instance(instance)?;
        if let Some(object_type) = object_type {
            check_object_type(object_type)?;
        }
    }

    let fields = CalendarFields::from_time_ms(time_ms)?;
    let id = Uuid::new_v4().hyphenated().to_string();
    let key = create_key(instance, object_type, &fields, &id, rolling);

    #[cfg(feature = "tracing")]
    tracing::trace!(key = %key, time_ms, "generated key");

    Ok(key)
}

/// Create a key from all of its parts
///
/// The identifier is embedded verbatim. No argument is validated.
pub fn create_key(
    instance: u32,
    object_type: Option<&str>,
    fields: &CalendarFields,
    id: &str,
    rolling: bool,
) -> String {
    let prefix = match object_type {
        Some(object_type) => instance_and_type_prefix(instance, object_type),
        None => instance_prefix(instance),
    };
    let roll = if rolling { ROLLING } else { "" };

    format!(
        "{}/{}/{:02}-{:02}-{:02}-{:03}-{}{}{}",
        prefix,
        date_string(fields.year, fields.month, fields.day),
        fields.hour,
        fields.minute,
        fields.second,
        fields.millisecond,
        id,
        roll,
        KEY_SUFFIX,
    )
}

/// Reject instance numbers that would not render as exactly nine digits
pub fn check_instance(instance: u32) -> Result<()> {
    if instance >= INSTANCE_LIMIT {
        return Err(Error::InstanceOutOfRange(instance));
    }
    Ok(())
}

/// Reject object types that cannot be a single key segment
pub fn check_object_type(object_type: &str) -> Result<()> {
    if object_type.is_empty() || object_type.contains('/') {
        return Err(Error::invalid_type(object_type));
    }
    Ok(())
}
