use crate::error::ValidationError;
use crate::format::format_iban;
use crate::models::IbanInfo;
use crate::util::clean_iban;
use chrono::{DateTime, Utc};

pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub iban: String,
    pub is_valid: bool,
    pub validated_at: DateTime<Utc>,
}

/// Most recent validations, newest first.
#[derive(Debug, Clone, Default)]
pub struct RecentValidations {
    entries: Vec<RecentEntry>,
}

impl RecentValidations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        raw: &str,
        outcome: &Result<IbanInfo, ValidationError>,
        now: DateTime<Utc>,
    ) {
        match outcome {
            Ok(info) => {
                let clean = clean_iban(raw);
                // A repeated valid IBAN keeps its slot and only refreshes its time.
                if let Some(existing) = self
                    .entries
                    .iter_mut()
                    .find(|entry| clean_iban(&entry.iban) == clean)
                {
                    existing.validated_at = now;
                    return;
                }
                self.push_front(RecentEntry {
                    iban: info.formatted_iban.clone(),
                    is_valid: true,
                    validated_at: now,
                });
            }
            Err(_) => self.push_front(RecentEntry {
                iban: format_iban(raw),
                is_valid: false,
                validated_at: now,
            }),
        }
    }

    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push_front(&mut self, entry: RecentEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(RECENT_LIMIT);
    }
}

pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}
