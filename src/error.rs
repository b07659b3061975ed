//! Error types for validation, generation and batch checking.

use thiserror::Error;

/// Reasons a candidate IBAN is rejected, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("IBAN is required")]
    EmptyInput,

    #[error("IBAN is too short")]
    TooShort,

    #[error("Invalid country code")]
    BadCountryCodeShape,

    #[error("Unsupported country code")]
    UnsupportedCountry,

    #[error("Invalid length for {country}. Expected {expected} characters")]
    WrongLength {
        country: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid check digits")]
    BadCheckDigitShape,

    #[error("Invalid IBAN (checksum failed)")]
    ChecksumFailed,
}

impl ValidationError {
    /// Stable label used in batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "empty_input",
            ValidationError::TooShort => "too_short",
            ValidationError::BadCountryCodeShape => "bad_country_code",
            ValidationError::UnsupportedCountry => "unsupported_country",
            ValidationError::WrongLength { .. } => "wrong_length",
            ValidationError::BadCheckDigitShape => "bad_check_digits",
            ValidationError::ChecksumFailed => "checksum_failed",
        }
    }
}

/// Misuse of the generator by its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Country code {0} is not supported for generation")]
    UnsupportedGenerationCountry(String),

    #[error("invalid generator config: {0}")]
    Config(String),

    #[error("generated IBAN {iban} failed validation: {source}")]
    SelfCheck {
        iban: String,
        #[source]
        source: ValidationError,
    },
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV input has no `iban` column")]
    MissingIbanColumn,
}
