//! Line-oriented front end shared by the `validate` and `session` commands.

use crate::format::format_iban;
use crate::history::{relative_time, RecentValidations};
use crate::models::IbanInfo;
use crate::validation::validate_iban;
use chrono::{DateTime, Utc};
use std::io::{self, BufRead, Write};

const CMD_QUIT: &str = ":quit";
const CMD_CLEAR: &str = ":clear";
const CMD_RECENT: &str = ":recent";

/// Validates each input and writes its fields or error. Returns how many
/// inputs were invalid.
pub fn validate_all<W: Write>(inputs: &[String], out: &mut W) -> io::Result<usize> {
    let mut invalid = 0usize;
    for raw in inputs {
        match validate_iban(raw) {
            Ok(info) => write_info(out, &info)?,
            Err(err) => {
                invalid += 1;
                writeln!(out, "{}: invalid ({})", format_iban(raw), err)?;
            }
        }
    }
    Ok(invalid)
}

/// Reads IBANs line by line until EOF or `:quit`, recording each outcome.
///
/// `:recent` lists the history with relative times and `:clear` empties it.
pub fn run_session<R, W, C>(
    input: R,
    out: &mut W,
    history: &mut RecentValidations,
    mut clock: C,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    C: FnMut() -> DateTime<Utc>,
{
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            CMD_QUIT => break,
            CMD_CLEAR => {
                history.clear();
                writeln!(out, "history cleared")?;
            }
            CMD_RECENT => write_recent(out, history, clock())?,
            raw => {
                let outcome = validate_iban(raw);
                match &outcome {
                    Ok(info) => write_info(out, info)?,
                    Err(err) => writeln!(out, "{}: invalid ({})", format_iban(raw), err)?,
                }
                history.record(raw, &outcome, clock());
            }
        }
    }
    out.flush()
}

pub fn write_recent<W: Write>(
    out: &mut W,
    history: &RecentValidations,
    now: DateTime<Utc>,
) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "no recent validations");
    }
    for entry in history.entries() {
        writeln!(
            out,
            "{:<7} {:<42} {}",
            if entry.is_valid { "valid" } else { "invalid" },
            entry.iban,
            relative_time(entry.validated_at, now)
        )?;
    }
    Ok(())
}

pub fn write_info<W: Write>(out: &mut W, info: &IbanInfo) -> io::Result<()> {
    writeln!(out, "{}: valid", info.formatted_iban)?;
    writeln!(out, "  country:        {} ({})", info.country, info.country_code)?;
    writeln!(out, "  check digits:   {}", info.check_digits)?;
    if let Some(bank_code) = info.bank_code.as_deref() {
        writeln!(out, "  bank code:      {}", bank_code)?;
    }
    writeln!(out, "  account number: {}", info.account_number)?;
    writeln!(out, "  bank:           {} ({})", info.bank_name, info.bic)
}
