use crate::error::ValidationError;
use crate::format::format_iban;
use crate::location::{is_check_digit_shape, is_country_code_shape};
use crate::models::IbanInfo;
use crate::reference::{bank_code_length, bank_identity, country_name, iban_length};
use crate::util::{clean_iban, iban_checksum_ok};

const MIN_LENGTH: usize = 5;

/// Checks `raw` and decomposes it into its fields.
///
/// Whitespace is ignored and letters are uppercased first. Checks run in a
/// fixed order and the first failure is returned.
pub fn validate_iban(raw: &str) -> Result<IbanInfo, ValidationError> {
    let clean = clean_iban(raw);
    if clean.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let actual = clean.chars().count();
    if actual < MIN_LENGTH {
        return Err(ValidationError::TooShort);
    }

    let country_code = match clean.get(0..2) {
        Some(code) if is_country_code_shape(code) => code,
        _ => return Err(ValidationError::BadCountryCodeShape),
    };

    let expected = iban_length(country_code).ok_or(ValidationError::UnsupportedCountry)?;
    if actual != expected {
        return Err(ValidationError::WrongLength {
            country: country_code.to_string(),
            expected,
            actual,
        });
    }

    let check_digits = match clean.get(2..4) {
        Some(digits) if is_check_digit_shape(digits) => digits,
        _ => return Err(ValidationError::BadCheckDigitShape),
    };

    if !iban_checksum_ok(&clean) {
        return Err(ValidationError::ChecksumFailed);
    }

    // Past the checksum every character is ASCII, so byte slicing is safe.
    let bban = &clean[4..];
    let bank_len = bank_code_length(country_code);
    let (bank_code, account_number) = if bank_len > 0 {
        let (bank, account) = bban.split_at(bank_len);
        (Some(bank.to_string()), account.to_string())
    } else {
        (None, bban.to_string())
    };

    let bank = bank_identity(country_code);
    Ok(IbanInfo {
        formatted_iban: format_iban(&clean),
        country: country_name(country_code).to_string(),
        country_code: country_code.to_string(),
        check_digits: check_digits.to_string(),
        bank_code,
        account_number,
        bic: bank.bic,
        bank_name: bank.bank_name,
    })
}

pub fn is_valid_iban(raw: &str) -> bool {
    validate_iban(raw).is_ok()
}
