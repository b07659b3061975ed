use crate::batch::BatchRow;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub by_country: Vec<(String, usize)>,
    pub by_error: Vec<(String, usize)>,
}

pub fn summarize(rows: &[BatchRow]) -> BatchSummary {
    let mut countries: HashMap<&str, usize> = HashMap::new();
    let mut errors: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        if let Some(code) = row.country_code.as_deref() {
            *countries.entry(code).or_insert(0) += 1;
        }
        if let Some(kind) = row.error_kind.as_deref() {
            *errors.entry(kind).or_insert(0) += 1;
        }
    }

    let valid = rows.iter().filter(|row| row.valid).count();
    BatchSummary {
        total: rows.len(),
        valid,
        invalid: rows.len() - valid,
        by_country: sorted_counts(countries),
        by_error: sorted_counts(errors),
    }
}

// Highest count first, ties broken by label.
fn sorted_counts(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{check_inputs, BatchInput};
    use pretty_assertions::assert_eq;

    fn inputs(values: &[&str]) -> Vec<BatchInput> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| BatchInput {
                line: idx as u64 + 1,
                value: value.to_string(),
            })
            .collect()
    }

    #[test]
    fn counts_by_country_and_error_kind() {
        let rows = check_inputs(&inputs(&[
            "DE89370400440532013000",
            "GB29NWBK60161331926819",
            "DE89 3704 0044 0532 0130 00",
            "",
            "XX1234567890",
            "DE88370400440532013000",
            "DE88370400440532013000",
        ]));
        let summary = summarize(&rows);

        assert_eq!(
            summary,
            BatchSummary {
                total: 7,
                valid: 3,
                invalid: 4,
                by_country: vec![("DE".to_string(), 2), ("GB".to_string(), 1)],
                by_error: vec![
                    ("checksum_failed".to_string(), 2),
                    ("empty_input".to_string(), 1),
                    ("unsupported_country".to_string(), 1),
                ],
            }
        );
    }

    #[test]
    fn empty_batch_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_country.is_empty());
        assert!(summary.by_error.is_empty());
    }
}
