use crate::reference::country_name;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankIdentity {
    pub bic: String,
    pub bank_name: String,
}

impl BankIdentity {
    pub fn new(bic: &str, bank_name: &str) -> Self {
        Self {
            bic: bic.to_string(),
            bank_name: bank_name.to_string(),
        }
    }
}

/// Fields decomposed from an IBAN that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanInfo {
    pub formatted_iban: String,
    pub country: String,
    pub country_code: String,
    pub check_digits: String,
    #[serde(default)]
    pub bank_code: Option<String>,
    pub account_number: String,
    pub bic: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

impl CountryEntry {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: country_name(code).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecord {
    pub iban: String,
    pub formatted: String,
    pub country_code: String,
    pub country: String,
}
