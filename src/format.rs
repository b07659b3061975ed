use crate::util::clean_iban;

const GROUP: usize = 4;

/// Groups an IBAN into blocks of four characters separated by single spaces.
pub fn format_iban(raw: &str) -> String {
    let clean = clean_iban(raw);
    let mut out = String::with_capacity(clean.len() + clean.len() / GROUP);
    for (idx, ch) in clean.chars().enumerate() {
        if idx > 0 && idx % GROUP == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
