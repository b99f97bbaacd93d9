//! Object keys for archived access-record batches and object snapshots
//!
//! Keys are organized by stack instance, optional object type, date and time:
//!
//! ```text
//! III/YYYY-MM-DD/HH-MM-SS-mmm-UUID[-rolling].csv.gz        access records
//! III/TYPE/YYYY-MM-DD/HH-MM-SS-mmm-UUID[-rolling].csv.gz   snapshots
//! ```
//!
//! `III` is the stack instance number zero-padded to nine digits. All times
//! are UTC. Object types must not contain `/` and should not contain
//! `-rolling`.

mod data;
mod format;
mod parse;
mod prefix;
pub mod time;

pub use data::{KeyData, KeyKind};
pub use format::{
    check_instance, check_object_type, create_key, create_new_access_record_key, create_new_key,
};
pub(crate) use format::generate_key;
pub use parse::{parse_key, parse_key_with_mode};
pub use prefix::{
    date_and_hour_from_key, date_and_hour_from_time_ms, date_string, date_string_from_key,
    date_string_from_time_ms, instance_and_type_prefix, instance_prefix,
};
pub use time::CalendarFields;

/// Marker appended to the identifier of an in-progress file
pub const ROLLING: &str = "-rolling";

/// Suffix of every key; the content is gzipped CSV
pub const KEY_SUFFIX: &str = ".csv.gz";

/// Type reported for keys without a type segment
pub const ACCESS_RECORD_TYPE: &str = "accessrecord";

/// Width of the stack instance segment
pub const INSTANCE_DIGITS: usize = 9;

/// Smallest instance number that no longer fits in the instance segment
pub const INSTANCE_LIMIT: u32 = 1_000_000_000;
