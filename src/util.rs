use rand::Rng;

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

pub fn random_alphanum_upper<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..CHARSET.len());
        out.push(char::from(CHARSET[idx]));
    }
    out
}

/// Removes all whitespace and uppercases what is left.
pub fn clean_iban(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// ISO 7064 MOD 97-10 remainder of `parts` read as one string, letters
/// expanded to 10..=35. Returns `None` on any other character.
pub fn mod97(parts: &[&str]) -> Option<u32> {
    let mut remainder: u32 = 0;
    for ch in parts.iter().flat_map(|part| part.chars()) {
        let value = if ch.is_ascii_digit() {
            ch as u32 - '0' as u32
        } else if ch.is_ascii_alphabetic() {
            ch.to_ascii_uppercase() as u32 - 'A' as u32 + 10
        } else {
            return None;
        };
        // Letters expand to two decimal digits, folded high digit first.
        if value >= 10 {
            remainder = (remainder * 10 + value / 10) % 97;
            remainder = (remainder * 10 + value % 10) % 97;
        } else {
            remainder = (remainder * 10 + value) % 97;
        }
    }
    Some(remainder)
}

/// True when `iban` (already clean) satisfies the MOD-97 check.
pub fn iban_checksum_ok(iban: &str) -> bool {
    match (iban.get(..4), iban.get(4..)) {
        (Some(head), Some(bban)) => mod97(&[bban, head]) == Some(1),
        _ => false,
    }
}

pub fn iban_check_digits(country: &str, bban: &str) -> Result<String, String> {
    if country.len() != 2 {
        return Err("IBAN country code must be 2 letters".to_string());
    }
    let remainder = mod97(&[bban, country, "00"])
        .ok_or_else(|| "IBAN contains invalid character".to_string())?;

    let check = 98 - remainder;
    Ok(format!("{:02}", check))
}
