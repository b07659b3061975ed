use crate::models::{BankIdentity, CountryEntry};

pub const IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AL", 28),
    ("AD", 24),
    ("AT", 20),
    ("AZ", 28),
    ("BH", 22),
    ("BY", 28),
    ("BE", 16),
    ("BA", 20),
    ("BR", 29),
    ("BG", 22),
    ("CR", 22),
    ("HR", 21),
    ("CY", 28),
    ("CZ", 24),
    ("DK", 18),
    ("DO", 28),
    ("EG", 29),
    ("SV", 28),
    ("EE", 20),
    ("FO", 18),
    ("FI", 18),
    ("FR", 27),
    ("GE", 22),
    ("DE", 22),
    ("GI", 23),
    ("GR", 27),
    ("GL", 18),
    ("GT", 28),
    ("HU", 28),
    ("IS", 26),
    ("IQ", 23),
    ("IE", 22),
    ("IL", 23),
    ("IT", 27),
    ("JO", 30),
    ("KZ", 20),
    ("XK", 20),
    ("KW", 30),
    ("LV", 21),
    ("LB", 28),
    ("LI", 21),
    ("LT", 20),
    ("LU", 20),
    ("MK", 19),
    ("MT", 31),
    ("MR", 27),
    ("MU", 30),
    ("MD", 24),
    ("MC", 27),
    ("ME", 22),
    ("NL", 18),
    ("NO", 15),
    ("PK", 24),
    ("PS", 29),
    ("PL", 28),
    ("PT", 25),
    ("QA", 29),
    ("RO", 24),
    ("LC", 32),
    ("SM", 27),
    ("ST", 25),
    ("SA", 24),
    ("RS", 22),
    ("SC", 31),
    ("SK", 24),
    ("SI", 19),
    ("ES", 24),
    ("SE", 24),
    ("CH", 21),
    ("TL", 23),
    ("TN", 24),
    ("TR", 26),
    ("UA", 29),
    ("AE", 23),
    ("GB", 22),
    ("VA", 22),
    ("VG", 24),
];

pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AL", "Albania"),
    ("AD", "Andorra"),
    ("AT", "Austria"),
    ("AZ", "Azerbaijan"),
    ("BH", "Bahrain"),
    ("BY", "Belarus"),
    ("BE", "Belgium"),
    ("BA", "Bosnia and Herzegovina"),
    ("BR", "Brazil"),
    ("BG", "Bulgaria"),
    ("CR", "Costa Rica"),
    ("HR", "Croatia"),
    ("CY", "Cyprus"),
    ("CZ", "Czech Republic"),
    ("DK", "Denmark"),
    ("DO", "Dominican Republic"),
    ("EG", "Egypt"),
    ("SV", "El Salvador"),
    ("EE", "Estonia"),
    ("FO", "Faroe Islands"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GE", "Georgia"),
    ("DE", "Germany"),
    ("GI", "Gibraltar"),
    ("GR", "Greece"),
    ("GL", "Greenland"),
    ("GT", "Guatemala"),
    ("HU", "Hungary"),
    ("IS", "Iceland"),
    ("IQ", "Iraq"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JO", "Jordan"),
    ("KZ", "Kazakhstan"),
    ("XK", "Kosovo"),
    ("KW", "Kuwait"),
    ("LV", "Latvia"),
    ("LB", "Lebanon"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("MK", "North Macedonia"),
    ("MT", "Malta"),
    ("MR", "Mauritania"),
    ("MU", "Mauritius"),
    ("MD", "Moldova"),
    ("MC", "Monaco"),
    ("ME", "Montenegro"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PK", "Pakistan"),
    ("PS", "Palestine"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("QA", "Qatar"),
    ("RO", "Romania"),
    ("LC", "Saint Lucia"),
    ("SM", "San Marino"),
    ("ST", "São Tomé and Príncipe"),
    ("SA", "Saudi Arabia"),
    ("RS", "Serbia"),
    ("SC", "Seychelles"),
    ("SK", "Slovakia"),
    ("SI", "Slovenia"),
    ("ES", "Spain"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("TL", "Timor-Leste"),
    ("TN", "Tunisia"),
    ("TR", "Turkey"),
    ("UA", "Ukraine"),
    ("AE", "United Arab Emirates"),
    ("GB", "United Kingdom"),
    ("VA", "Vatican City"),
    ("VG", "British Virgin Islands"),
];

pub const BANK_CODE_LENGTHS: &[(&str, usize)] = &[
    ("DE", 8),
    ("FR", 10),
    ("GB", 6),
    ("ES", 8),
    ("IT", 11),
    ("NL", 4),
    ("BE", 3),
    ("PT", 8),
    ("AT", 5),
    ("PL", 8),
    ("CH", 5),
    ("SE", 3),
    ("NO", 4),
    ("FI", 6),
    ("DK", 4),
    ("IE", 4),
    ("SK", 4),
    ("CZ", 4),
    ("HU", 8),
    ("RO", 4),
    ("BG", 4),
    ("HR", 7),
    ("SI", 5),
    ("LV", 4),
    ("LT", 5),
    ("EE", 2),
    ("GR", 7),
];

// Demonstration data only, not a BIC directory.
pub const BANK_DATA: &[(&str, &str, &str)] = &[
    ("DE", "DEUTDEFF", "Deutsche Bank"),
    ("FR", "BNPAFRPP", "BNP Paribas"),
    ("GB", "BARCGB22", "Barclays Bank"),
    ("ES", "BBVAESMM", "BBVA"),
    ("IT", "UNCRITM1", "UniCredit"),
    ("NL", "ABNANL2A", "ABN AMRO"),
    ("BE", "GEBABEBB", "KBC Bank"),
    ("CH", "UBSWCHZH", "UBS Switzerland"),
    ("SK", "TATRSKBX", "Tatra Banka"),
    ("CZ", "KOMBCZPP", "Komerční Banka"),
    ("AT", "BKAUATWW", "Bank Austria"),
    ("PL", "BREXPLPW", "mBank"),
    ("HU", "OTPVHUHB", "OTP Bank"),
    ("RO", "BTRLRO22", "Banca Transilvania"),
    ("BG", "BPBIBGSF", "Postbank"),
    ("HR", "ZABAHR2X", "Zagrebačka Banka"),
];

pub const FALLBACK_BIC: &str = "NOTAVAILABLE";
pub const FALLBACK_BANK_NAME: &str = "International Bank";
pub const UNKNOWN_COUNTRY_NAME: &str = "Unknown";

/// Countries the generator can synthesize, in listing order.
pub const GENERATION_COUNTRIES: &[&str] = &["DE", "FR", "GB", "ES", "IT", "NL", "BE", "CH", "AT"];

pub fn iban_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, len)| *len)
}

/// Bank-code prefix length within the BBAN, 0 when the layout is unknown.
pub fn bank_code_length(country: &str) -> usize {
    BANK_CODE_LENGTHS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, len)| *len)
        .unwrap_or(0)
}

pub fn country_name(country: &str) -> &'static str {
    COUNTRY_NAMES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_COUNTRY_NAME)
}

pub fn bank_identity(country: &str) -> BankIdentity {
    BANK_DATA
        .iter()
        .find(|(code, _, _)| *code == country)
        .map(|(_, bic, name)| BankIdentity::new(bic, name))
        .unwrap_or_else(|| BankIdentity::new(FALLBACK_BIC, FALLBACK_BANK_NAME))
}

pub fn is_generation_country(code: &str) -> bool {
    GENERATION_COUNTRIES.iter().any(|country| *country == code)
}

pub fn supported_generation_countries() -> Vec<CountryEntry> {
    GENERATION_COUNTRIES
        .iter()
        .map(|code| CountryEntry::new(code))
        .collect()
}

pub fn registry_countries() -> Vec<CountryEntry> {
    IBAN_LENGTHS
        .iter()
        .map(|(code, _)| CountryEntry::new(code))
        .collect()
}
