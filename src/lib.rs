//! IBAN validation, decomposition and synthetic generation.
//!
//! The core is [`validate_iban`], [`generate_iban`] and [`format_iban`]; the
//! country tables they share live in [`reference`].

pub mod analysis;
pub mod batch;
pub mod error;
pub mod format;
pub mod generator;
pub mod history;
pub mod location;
pub mod models;
pub mod reference;
pub mod session;
pub mod util;
pub mod validation;

pub use error::{BatchError, GenerateError, ValidationError};
pub use format::format_iban;
pub use generator::{generate_iban, generate_iban_with_rng};
pub use models::{BankIdentity, CountryEntry, IbanInfo};
pub use reference::supported_generation_countries;
pub use validation::validate_iban;
