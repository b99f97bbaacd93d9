use archive_keys::{
    create_new_access_record_key, create_new_key, date_and_hour_from_time_ms, date_string_from_key,
    date_string_from_time_ms, instance_and_type_prefix, instance_prefix, parse_key, KeyCodec,
    KeyKind,
};
use proptest::prelude::*;

// 9999-12-31T23:59:59.999Z
const MAX_FOUR_DIGIT_YEAR_MS: i64 = 253_402_300_799_999;

fn all_digits(s: &str, width: usize) -> bool {
    s.len() == width && s.bytes().all(|b| b.is_ascii_digit())
}

/// `^\d{9}(/[A-Za-z0-9_]+)?/\d{4}-\d{2}-\d{2}/\d{2}-\d{2}-\d{2}-\d{3}-[0-9a-f-]+(-rolling)?\.csv\.gz$`
fn has_key_shape(key: &str) -> bool {
    let segments: Vec<&str> = key.split('/').collect();
    let (instance, object_type, date, file_name) = match segments.as_slice() {
        [i, d, f] => (*i, None, *d, *f),
        [i, t, d, f] => (*i, Some(*t), *d, *f),
        _ => return false,
    };

    let type_ok = object_type.map_or(true, |t| {
        !t.is_empty() && t.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
    });
    let date_parts: Vec<&str> = date.split('-').collect();
    let date_ok = date_parts.len() == 3
        && all_digits(date_parts[0], 4)
        && all_digits(date_parts[1], 2)
        && all_digits(date_parts[2], 2);

    let Some(stem) = file_name.strip_suffix(".csv.gz") else {
        return false;
    };
    let stem = stem.strip_suffix("-rolling").unwrap_or(stem);
    let time_parts: Vec<&str> = stem.splitn(5, '-').collect();
    let time_ok = time_parts.len() == 5
        && all_digits(time_parts[0], 2)
        && all_digits(time_parts[1], 2)
        && all_digits(time_parts[2], 2)
        && all_digits(time_parts[3], 3)
        && !time_parts[4].is_empty()
        && time_parts[4].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'-'));

    all_digits(instance, 9) && type_ok && date_ok && time_ok
}

proptest! {
    #[test]
    fn generated_keys_round_trip(
        instance in 0u32..1_000_000_000,
        object_type in proptest::option::of("[A-Za-z0-9_]{1,16}"),
        time_ms in 0i64..=MAX_FOUR_DIGIT_YEAR_MS,
        rolling in any::<bool>(),
    ) {
        let key = create_new_key(instance, object_type.as_deref(), time_ms, rolling).unwrap();
        prop_assert!(has_key_shape(&key), "bad shape: {}", key);

        let data = parse_key(&key).unwrap();
        prop_assert_eq!(data.stack_instance_number, instance);
        prop_assert_eq!(data.time_ms, time_ms);
        prop_assert_eq!(data.rolling, rolling);
        prop_assert_eq!(data.key(), key.clone());
        match object_type {
            Some(t) => {
                prop_assert_eq!(data.object_type.as_str(), t.as_str());
                prop_assert_eq!(data.kind(), KeyKind::Snapshot);
            }
            None => {
                prop_assert_eq!(data.object_type.as_str(), "accessrecord");
                prop_assert_eq!(data.kind(), KeyKind::AccessRecord);
                prop_assert_eq!(date_string_from_key(&key).unwrap(), data.date_string());
            }
        }
    }

    #[test]
    fn date_helpers_agree_with_keys(time_ms in 0i64..=MAX_FOUR_DIGIT_YEAR_MS) {
        let key = create_new_access_record_key(1, time_ms, false).unwrap();
        let date = date_string_from_time_ms(time_ms).unwrap();
        prop_assert_eq!(date_string_from_key(&key).unwrap(), date.as_str());

        let date_and_hour = date_and_hour_from_time_ms(time_ms).unwrap();
        prop_assert!(date_and_hour.starts_with(&date));
        let expected = format!("000000001/{}-", date_and_hour);
        prop_assert!(key.starts_with(&expected), "{} does not start with {}", key, expected);
    }

    #[test]
    fn strict_codec_accepts_generated_keys(
        instance in 0u32..1_000_000_000,
        time_ms in 0i64..=MAX_FOUR_DIGIT_YEAR_MS,
    ) {
        let codec = KeyCodec::with_config(
            archive_keys::CodecConfig::new().with_parse_mode(archive_keys::ParseMode::Strict),
        ).unwrap();
        let key = codec.create_new_key(instance, Some("node"), time_ms, false).unwrap();
        prop_assert_eq!(codec.parse_key(&key).unwrap().time_ms, time_ms);
    }
}

#[test]
fn epoch_access_record_key() {
    let key = create_new_access_record_key(12, 0, false).unwrap();
    assert!(key.starts_with("000000012/1970-01-01/00-00-00-000-"));
    assert!(key.ends_with(".csv.gz"));
    assert!(has_key_shape(&key));
}

#[test]
fn rolling_snapshot_key() -> anyhow::Result<()> {
    let key = create_new_key(1, Some("node"), 1_700_000_000_000, true)?;
    assert!(key.starts_with("000000001/node/2023-11-14/22-13-20-000-"));
    assert!(key.ends_with("-rolling.csv.gz"));

    let data = parse_key(&key)?;
    assert_eq!(data.stack_instance_number, 1);
    assert_eq!(data.object_type, "node");
    assert_eq!(data.time_ms, 1_700_000_000_000);
    assert!(data.rolling);
    assert_eq!(data.path, "000000001/node/2023-11-14");
    assert_eq!(data.file_name, &key["000000001/node/2023-11-14/".len()..]);
    assert_eq!(data.timestamp()?.to_rfc3339(), "2023-11-14T22:13:20+00:00");

    Ok(())
}

#[test]
fn listing_prefixes() {
    assert_eq!(instance_prefix(7), "000000007");
    assert_eq!(instance_and_type_prefix(42, "node"), "000000042/node");
    assert_eq!(date_and_hour_from_time_ms(1_700_000_000_000).unwrap(), "2023-11-14/22");

    let key = create_new_key(42, Some("node"), 0, false).unwrap();
    assert!(key.starts_with(&instance_and_type_prefix(42, "node")));
}

#[test]
fn strict_codec_accepts_five_digit_years() -> anyhow::Result<()> {
    let codec = KeyCodec::with_config(
        archive_keys::CodecConfig::new().with_parse_mode(archive_keys::ParseMode::Strict),
    )?;
    // 10000-01-01T00:00:00Z
    let key = codec.create_new_access_record_key(1, MAX_FOUR_DIGIT_YEAR_MS + 1, false)?;
    assert!(key.starts_with("000000001/10000-01-01/00-00-00-000-"));
    assert_eq!(codec.parse_key(&key)?.time_ms, MAX_FOUR_DIGIT_YEAR_MS + 1);

    Ok(())
}

#[test]
fn rejected_keys() {
    for key in [
        "",
        "000000003/2020-02-29",
        "000000003/x/y/z/w",
        "000000003/2020-02/05-06-07-008-abcd.csv.gz",
        "000000003/2020-02-29/05-06-07.csv.gz",
    ] {
        let err = parse_key(key).unwrap_err();
        assert!(err.is_invalid_key(), "{:?}", key);
        assert_eq!(err.key(), Some(key));
    }
}
