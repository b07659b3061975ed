use crate::analysis::{summarize, BatchSummary};
use crate::error::BatchError;
use crate::validation::validate_iban;
use serde::Serialize;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One checked input, as written to the report CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub line: u64,
    pub input: String,
    pub valid: bool,
    pub country_code: Option<String>,
    pub formatted: Option<String>,
    pub error_kind: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
    pub summary: BatchSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    pub line: u64,
    pub value: String,
}

/// Validates every IBAN listed in `path`.
///
/// The file is either a CSV with an `iban` header column or plain text with
/// one IBAN per line. Blank lines and `#` comments are skipped in plain text.
pub fn check_file(path: &Path) -> Result<BatchReport, BatchError> {
    let content = std::fs::read_to_string(path)?;
    let inputs = parse_inputs(&content)?;
    log::debug!("checking {} input(s) from {}", inputs.len(), path.display());
    let rows = check_inputs(&inputs);
    let summary = summarize(&rows);
    Ok(BatchReport { rows, summary })
}

pub fn parse_inputs(content: &str) -> Result<Vec<BatchInput>, BatchError> {
    // Spreadsheet "CSV UTF-8" exports start with a byte-order mark.
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let header = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'));

    match header {
        Some(line) if is_csv_header(line) => parse_csv(content),
        Some(line) if line.contains(',') => Err(BatchError::MissingIbanColumn),
        _ => Ok(parse_lines(content)),
    }
}

pub fn check_inputs(inputs: &[BatchInput]) -> Vec<BatchRow> {
    inputs
        .iter()
        .map(|input| match validate_iban(&input.value) {
            Ok(info) => BatchRow {
                line: input.line,
                input: input.value.clone(),
                valid: true,
                country_code: Some(info.country_code),
                formatted: Some(info.formatted_iban),
                error_kind: None,
                message: None,
            },
            Err(err) => BatchRow {
                line: input.line,
                input: input.value.clone(),
                valid: false,
                country_code: None,
                formatted: None,
                error_kind: Some(err.kind().to_string()),
                message: Some(err.to_string()),
            },
        })
        .collect()
}

pub fn write_report(rows: &[BatchRow], output: &Path) -> Result<(), BatchError> {
    write_csv(rows, output)
}

/// Serializes `rows` to `output`, creating missing parent directories.
pub fn write_csv<T: Serialize>(rows: &[T], output: &Path) -> Result<(), BatchError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(output)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn is_csv_header(line: &str) -> bool {
    line.split(',')
        .any(|cell| cell.trim().eq_ignore_ascii_case("iban"))
}

fn parse_csv(content: &str) -> Result<Vec<BatchInput>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(content.as_bytes());
    let column = reader
        .headers()?
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case("iban"))
        .ok_or(BatchError::MissingIbanColumn)?;

    let mut inputs = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let value = record.get(column).unwrap_or("").trim().to_string();
        inputs.push(BatchInput { line, value });
    }
    Ok(inputs)
}

fn parse_lines(content: &str) -> Vec<BatchInput> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(BatchInput {
                    line: idx as u64 + 1,
                    value: trimmed.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_skips_blanks_and_comments() {
        let inputs = parse_inputs("# accounts\nDE89 3704 0044 0532 0130 00\n\n  GB29NWBK60161331926819 \n")
            .unwrap();
        assert_eq!(
            inputs,
            vec![
                BatchInput {
                    line: 2,
                    value: "DE89 3704 0044 0532 0130 00".to_string()
                },
                BatchInput {
                    line: 4,
                    value: "GB29NWBK60161331926819".to_string()
                },
            ]
        );
    }

    #[test]
    fn csv_uses_the_iban_column() {
        let content = "name,IBAN\nAlice,DE89370400440532013000\nBob, XX00\n";
        let inputs = parse_inputs(content).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].value, "DE89370400440532013000");
        assert_eq!(inputs[0].line, 2);
        assert_eq!(inputs[1].value, "XX00");
        assert_eq!(inputs[1].line, 3);
    }

    #[test]
    fn byte_order_mark_is_ignored_in_single_column_file() {
        let inputs = parse_inputs("\u{feff}iban\nDE89370400440532013000\n").unwrap();
        assert_eq!(
            inputs,
            vec![BatchInput {
                line: 2,
                value: "DE89370400440532013000".to_string()
            }]
        );
    }

    #[test]
    fn byte_order_mark_does_not_hide_leading_iban_column() {
        let inputs = parse_inputs("\u{feff}iban,name\nDE89370400440532013000,a\n").unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].value, "DE89370400440532013000");
        assert_eq!(inputs[0].line, 2);
    }

    #[test]
    fn byte_order_mark_is_ignored_in_plain_text() {
        let inputs = parse_inputs("\u{feff}GB29NWBK60161331926819\n").unwrap();
        assert_eq!(inputs[0].value, "GB29NWBK60161331926819");
        assert_eq!(inputs[0].line, 1);
    }

    #[test]
    fn csv_without_iban_column_is_rejected() {
        assert!(matches!(
            parse_inputs("name,account\nAlice,DE89\n"),
            Err(BatchError::MissingIbanColumn)
        ));
    }

    #[test]
    fn rows_carry_kind_and_message() {
        let rows = check_inputs(&[
            BatchInput {
                line: 1,
                value: "DE89370400440532013000".to_string(),
            },
            BatchInput {
                line: 2,
                value: "DE88370400440532013000".to_string(),
            },
        ]);
        assert!(rows[0].valid);
        assert_eq!(rows[0].country_code.as_deref(), Some("DE"));
        assert_eq!(rows[0].formatted.as_deref(), Some("DE89 3704 0044 0532 0130 00"));
        assert!(!rows[1].valid);
        assert_eq!(rows[1].error_kind.as_deref(), Some("checksum_failed"));
        assert_eq!(
            rows[1].message.as_deref(),
            Some("Invalid IBAN (checksum failed)")
        );
    }
}
