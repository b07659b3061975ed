use crate::error::GenerateError;
use crate::location::normalize_country_code;
use crate::models::GeneratedRecord;
use crate::reference::{
    bank_code_length, iban_length, is_generation_country, GENERATION_COUNTRIES,
};
use crate::util::{iban_check_digits, random_alphanum_upper, random_digits};
use crate::validation::validate_iban;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_BANK_CODE_LENGTH: usize = 4;
// Country letters plus check digits.
const PREFIX_LENGTH: usize = 4;

const NUMERIC_BANK_CODE: &[&str] = &["GB", "DE", "AT", "CH"];
const NUMERIC_ACCOUNT: &[&str] = &["DE", "AT", "CH", "NL", "BE", "GB"];

pub struct GeneratorConfig {
    pub country: Option<String>,
    pub count: usize,
    pub max_count: usize,
}

/// Generates an unformatted IBAN using the thread-local RNG.
///
/// With no country, one of [`GENERATION_COUNTRIES`] is picked uniformly.
pub fn generate_iban(country: Option<&str>) -> Result<String, GenerateError> {
    let mut rng = rand::thread_rng();
    generate_iban_with_rng(&mut rng, country)
}

pub fn generate_iban_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    country: Option<&str>,
) -> Result<String, GenerateError> {
    let country = match country {
        Some(requested) => resolve_country(requested)?,
        None => pick_country(rng).to_string(),
    };

    let total_length = iban_length(&country)
        .ok_or_else(|| GenerateError::UnsupportedGenerationCountry(country.clone()))?;
    let bank_len = match bank_code_length(&country) {
        0 => DEFAULT_BANK_CODE_LENGTH,
        len => len,
    };
    let account_len = total_length.saturating_sub(PREFIX_LENGTH + bank_len);

    let bank_code = if NUMERIC_BANK_CODE.contains(&country.as_str()) {
        random_digits(rng, bank_len)
    } else {
        random_alphanum_upper(rng, bank_len)
    };
    let account_number = if NUMERIC_ACCOUNT.contains(&country.as_str()) {
        random_digits(rng, account_len)
    } else {
        random_alphanum_upper(rng, account_len)
    };

    let bban = format!("{}{}", bank_code, account_number);
    let check = iban_check_digits(&country, &bban).map_err(GenerateError::Config)?;
    Ok(format!("{}{}{}", country, check, bban))
}

/// Generates `config.count` IBANs from a seeded RNG, re-validating each one.
pub fn generate_records(
    config: &GeneratorConfig,
    seed: u64,
) -> Result<Vec<GeneratedRecord>, GenerateError> {
    validate_config(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut records = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let iban = generate_iban_with_rng(&mut rng, config.country.as_deref())?;
        let info = validate_iban(&iban).map_err(|source| GenerateError::SelfCheck {
            iban: iban.clone(),
            source,
        })?;
        log::debug!("generated {} ({})", info.formatted_iban, info.country_code);
        records.push(GeneratedRecord {
            formatted: info.formatted_iban,
            country: info.country,
            country_code: info.country_code,
            iban,
        });
    }
    Ok(records)
}

fn validate_config(config: &GeneratorConfig) -> Result<(), GenerateError> {
    if config.count == 0 {
        return Err(GenerateError::Config(
            "count must be greater than 0".to_string(),
        ));
    }
    if config.count > config.max_count {
        return Err(GenerateError::Config(format!(
            "count must not exceed {}",
            config.max_count
        )));
    }
    if let Some(country) = config.country.as_deref() {
        resolve_country(country)?;
    }
    Ok(())
}

fn resolve_country(requested: &str) -> Result<String, GenerateError> {
    match normalize_country_code(requested) {
        Some(code) if is_generation_country(&code) => Ok(code),
        _ => Err(GenerateError::UnsupportedGenerationCountry(
            requested.trim().to_string(),
        )),
    }
}

fn pick_country<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GENERATION_COUNTRIES[rng.gen_range(0..GENERATION_COUNTRIES.len())]
}
