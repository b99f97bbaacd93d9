//! Parsed key record
//!
//! `KeyData` is the structured view of a key produced by the parser.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::time::utc_from_millis;
use crate::key::{parse_key, ACCESS_RECORD_TYPE};

/// Layout of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// `III/YYYY-MM-DD/<file>`
    AccessRecord,
    /// `III/TYPE/YYYY-MM-DD/<file>`
    Snapshot,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::AccessRecord => write!(f, "access_record"),
            KeyKind::Snapshot => write!(f, "snapshot"),
        }
    }
}

impl KeyKind {
    /// Number of `/`-separated segments in a key of this kind
    pub fn segment_count(&self) -> usize {
        match self {
            KeyKind::AccessRecord => 3,
            KeyKind::Snapshot => 4,
        }
    }

    /// Determine the layout from a segment count
    pub fn from_segment_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(KeyKind::AccessRecord),
            4 => Some(KeyKind::Snapshot),
            _ => None,
        }
    }
}

/// Information extracted from a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    /// Stack instance that produced the object
    pub stack_instance_number: u32,
    /// Object type; `"accessrecord"` for access-record keys
    #[serde(rename = "type")]
    pub object_type: String,
    /// UTC instant encoded in the key, epoch milliseconds
    #[serde(rename = "timeMS")]
    pub time_ms: i64,
    /// Everything before the file name, up to and including the date
    pub path: String,
    /// Final segment of the key, including the `.csv.gz` suffix
    pub file_name: String,
    /// Whether the file is an in-progress rolling file
    pub rolling: bool,
}

impl KeyData {
    /// Layout of the key this record was parsed from
    ///
    /// Derived from the path, so a snapshot whose type happens to be
    /// `"accessrecord"` is still reported as a snapshot.
    pub fn kind(&self) -> KeyKind {
        // The path holds every segment but the file name.
        match self.path.split('/').count() + 1 {
            4 => KeyKind::Snapshot,
            _ => KeyKind::AccessRecord,
        }
    }

    /// Check if this is a snapshot key
    pub fn is_snapshot(&self) -> bool {
        self.kind() == KeyKind::Snapshot
    }

    /// Check if this is an access-record key
    pub fn is_access_record(&self) -> bool {
        self.kind() == KeyKind::AccessRecord && self.object_type == ACCESS_RECORD_TYPE
    }

    /// Reassemble the original key
    pub fn key(&self) -> String {
        format!("{}/{}", self.path, self.file_name)
    }

    /// Date segment of the key (`YYYY-MM-DD`)
    pub fn date_string(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// The encoded instant as a UTC date-time
    pub fn timestamp(&self) -> Result<DateTime<Utc>> {
        utc_from_millis(self.time_ms)
    }
}

impl fmt::Display for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path, self.file_name)
    }
}

impl FromStr for KeyData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_key(s)
    }
}
