//! Object-key codec for archived access records and object snapshots
//!
//! Generates blob-store keys partitioned by stack instance, optional object
//! type, UTC date and time, and parses them back into [`KeyData`].
//!
//! ```
//! use archive_keys::{create_new_key, parse_key};
//!
//! let key = create_new_key(1, Some("node"), 1_700_000_000_000, true)?;
//! assert!(key.starts_with("000000001/node/2023-11-14/22-13-20-000-"));
//!
//! let data = parse_key(&key)?;
//! assert_eq!(data.object_type, "node");
//! assert_eq!(data.time_ms, 1_700_000_000_000);
//! assert!(data.rolling);
//! # Ok::<(), archive_keys::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod key;

pub use codec::KeyCodec;
pub use config::{CodecConfig, ParseMode};
pub use error::{Error, Result};
pub use key::{
    create_new_access_record_key, create_new_key, date_and_hour_from_key,
    date_and_hour_from_time_ms, date_string, date_string_from_key, date_string_from_time_ms,
    instance_and_type_prefix, instance_prefix, parse_key, KeyData, KeyKind,
};
