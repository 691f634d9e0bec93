use recast_api::{ChangeRecord, LogicalType, Operation};
use recast_engine::{EngineError, FieldErrorPolicy, RecastConfig, RecordConverter};

fn parse(lines: &str) -> Vec<ChangeRecord> {
    lines
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn converter(toml: &str) -> RecordConverter {
    RecordConverter::from_config(&RecastConfig::parse(toml).unwrap()).unwrap()
}

#[test]
fn oracle_stream() {
    let records = parse(
        r#"
        {"operation":"BEGIN","source_timestamp":1700000000}
        {"operation":"INSERT","source_timestamp":1700000000,"fields":[{"type_code":2,"value":{"Decimal":"19.99"},"name":"PRICE"},{"type_code":12,"value":{"DateTime":{"year":-44,"month":3,"day":15}},"name":"BORN"},{"type_code":1,"value":{"Character":{"value":"1tDOxA==","charset":"ZHS16GBK"}},"name":"NAME"},{"type_code":183,"value":{"DateTime":{"day":-2,"hour":-3,"minute":-4,"second":-5,"fraction":-123456789}},"name":"SPAN"},{"type_code":113,"name":"PHOTO"}]}
        {"operation":"COMMIT","source_timestamp":1700000000}
        "#,
    );
    let mut converter = converter(r#"source = "Oracle""#);

    let out: Vec<_> = records
        .iter()
        .map(|r| converter.convert(r).unwrap().unwrap())
        .collect();
    assert_eq!(out.len(), 3);
    assert!(out[0].fields.is_empty());
    assert!(out[2].fields.is_empty());

    let insert = &out[1];
    assert_eq!(insert.operation, Operation::Insert);
    let values: Vec<_> = insert
        .fields
        .iter()
        .map(|f| f.value.clone().unwrap())
        .collect();

    assert_eq!(values[0].as_str(), Some("19.99"));
    assert_eq!(values[0].encoding.as_deref(), Some("ASCII"));
    assert_eq!(values[1].as_str(), Some("-0044-03-15 00:00:00"));
    assert_eq!(values[2].bytes.as_deref(), Some(&[0xD6, 0xD0, 0xCE, 0xC4][..]));
    assert_eq!(values[2].encoding.as_deref(), Some("ZHS16GBK"));
    assert_eq!(values[3].as_str(), Some("-2 3:4:5.123456789"));
    assert!(values[4].is_null());
    assert_eq!(values[4].logical_type, LogicalType::Bytes);
    assert_eq!(values[4].encoding, None);

    let stats = converter.stats();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.fields, 5);
    assert_eq!(stats.failed_fields, 0);
}

#[test]
fn postgres_stream_with_skip_policy() {
    let records = parse(
        r#"
        {"operation":"UPDATE","source_timestamp":10,"fields":[{"type_code":1184,"value":{"TimestampWithTimeZone":{"value":{"year":2024,"month":1,"day":2,"hour":3,"minute":4,"second":5,"fraction":6},"timezone":"+08:00"}}},{"type_code":1266,"value":{"TimestampWithTimeZone":{"value":{"hour":14,"minute":30},"timezone":"+08"}}},{"type_code":9999,"value":{"TextObject":"?"}},{"type_code":869,"value":{"TextObject":"10.0.0.1"}}]}
        "#,
    );
    let mut converter = converter("source = \"polardb-pg\"\non_field_error = \"skip\"");

    let out = converter.convert(&records[0]).unwrap().unwrap();
    assert_eq!(
        out.fields[0].value.as_ref().unwrap().as_str(),
        Some("2024-01-02 03:04:05.000006 +08:00")
    );
    assert_eq!(out.fields[1].value.as_ref().unwrap().as_str(), Some("14:30:00+08"));
    assert_eq!(out.fields[2].value, None);
    assert_eq!(out.fields[2].logical_type, None);
    assert_eq!(out.fields[3].logical_type, Some(LogicalType::Inet));
    assert_eq!(converter.stats().failed_fields, 1);
}

#[test]
fn mysql_stream_abort_and_filter() {
    let records = parse(
        r#"
        {"operation":"INSERT","source_timestamp":5,"fields":[{"type_code":3,"value":{"Integer":"1"}}]}
        {"operation":"INSERT","source_timestamp":20,"fields":[{"type_code":7,"value":{"Timestamp":{"seconds":86400,"micros":1}}},{"type_code":254,"value":{"Character":{"value":"/w==","charset":"utf8mb4"}}}]}
        "#,
    );
    let mut converter = converter("source = \"rds-mysql\"\nstart_timestamp = 10");

    assert!(converter.convert(&records[0]).unwrap().is_none());
    match converter.convert(&records[1]) {
        Err(EngineError::Field { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected field error, got {other:?}"),
    }
    assert_eq!(converter.stats().skipped_records, 1);
    assert_eq!(converter.stats().fields, 1);
}

#[test]
fn policy_defaults_to_abort() {
    let config = RecastConfig::parse(r#"source = "mysql""#).unwrap();
    assert_eq!(config.on_field_error, FieldErrorPolicy::Abort);
}

#[test]
fn converters_are_shared_across_threads() {
    use recast_api::{DateTime, RawValue};

    for source in ["oracle", "postgresql", "mysql"] {
        let converter = recast_engine::converter_for(source).unwrap();
        let code = match converter.dialect() {
            recast_api::Dialect::Oracle => 180,
            recast_api::Dialect::PostgreSql => 1114,
            recast_api::Dialect::MySql => 12,
        };

        std::thread::scope(|scope| {
            let handles: Vec<_> = (1..=8)
                .map(|day| {
                    scope.spawn(move || {
                        let raw = RawValue::DateTime(DateTime::new(2024, 1, day, 12, 0, 0));
                        (0..100)
                            .map(|_| converter.convert(code, Some(&raw)).unwrap())
                            .last()
                            .unwrap()
                    })
                })
                .collect();
            for (day, handle) in (1..=8).zip(handles) {
                let value = handle.join().unwrap();
                let expected = format!("2024-01-{day:02} 12:00:00");
                assert_eq!(value.as_str(), Some(expected.as_str()), "{source}");
            }
        });
    }
}
