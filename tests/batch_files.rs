use iban_demo::batch::{check_file, write_csv, write_report};
use iban_demo::generator::{generate_records, GeneratorConfig};
use iban_demo::{validate_iban, BatchError};
use std::fs;
use tempfile::tempdir;

#[test]
fn checks_plain_text_file_and_writes_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ibans.txt");
    fs::write(
        &input,
        "# sample accounts\nDE89 3704 0044 0532 0130 00\nGB29NWBK60161331926819\n\nDE8937040044\n",
    )
    .unwrap();

    let report = check_file(&input).unwrap();
    let rows = &report.rows;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].line, 5);
    assert_eq!(rows[2].error_kind.as_deref(), Some("wrong_length"));

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.valid, 2);
    assert_eq!(report.summary.invalid, 1);
    assert_eq!(report.summary.by_error, vec![("wrong_length".to_string(), 1)]);

    let output = dir.path().join("out").join("report.csv");
    write_report(rows, &output).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        headers,
        [
            "line",
            "input",
            "valid",
            "country_code",
            "formatted",
            "error_kind",
            "message"
        ]
    );
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][2], "true");
    assert_eq!(&records[0][4], "DE89 3704 0044 0532 0130 00");
    assert_eq!(&records[2][2], "false");
    assert_eq!(&records[2][6], "Invalid length for DE. Expected 22 characters");
}

#[test]
fn checks_csv_file_by_header() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("accounts.csv");
    fs::write(
        &input,
        "holder,iban,note\nAlice,DE89370400440532013000,primary\nBob,FR00,\n",
    )
    .unwrap();

    let rows = check_file(&input).unwrap().rows;
    assert_eq!(rows.len(), 2);
    assert!(rows[0].valid);
    assert_eq!(rows[1].input, "FR00");
    assert_eq!(rows[1].error_kind.as_deref(), Some("too_short"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = check_file(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(BatchError::Io(_))));
}

#[test]
fn generated_records_write_expected_columns() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        country: Some("nl".to_string()),
        count: 5,
        max_count: 100,
    };
    let records = generate_records(&config, 2024).unwrap();
    let output = dir.path().join("generated").join("ibans.csv");
    write_csv(&records, &output).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["iban", "formatted", "country_code", "country"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 5);
    for row in &rows {
        let info = validate_iban(&row[0]).unwrap();
        assert_eq!(&row[1], info.formatted_iban);
        assert_eq!(&row[2], "NL");
        assert_eq!(&row[3], "Netherlands");
    }
}
