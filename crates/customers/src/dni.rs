//! Spanish DNI format check.

use hotel_core::{DomainError, DomainResult, NationalIdValidator};

const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";
const DIGITS: usize = 8;

/// Validator for Spanish DNI numbers: eight digits followed by the uppercase
/// control letter `CONTROL_LETTERS[number % 23]`. Input is not trimmed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpanishDni;

impl SpanishDni {
    /// Control letter that belongs to the given DNI number.
    pub fn control_letter(number: u32) -> char {
        let index = (number % 23) as usize;
        char::from(CONTROL_LETTERS[index])
    }
}

impl NationalIdValidator for SpanishDni {
    fn validate(&self, national_id: &str) -> DomainResult<()> {
        let (digits, letter) = match national_id.char_indices().nth(DIGITS) {
            Some((split, _)) => national_id.split_at(split),
            None => {
                return Err(DomainError::invalid_format(
                    "DNI must be 8 digits followed by a letter",
                ));
            }
        };

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_format(
                "DNI must start with 8 digits",
            ));
        }

        let mut rest = letter.chars();
        let (Some(given), None) = (rest.next(), rest.next()) else {
            return Err(DomainError::invalid_format(
                "DNI must be 8 digits followed by a letter",
            ));
        };

        let number: u32 = digits
            .parse()
            .map_err(|_| DomainError::invalid_format("DNI must start with 8 digits"))?;
        let expected = Self::control_letter(number);

        if given != expected {
            return Err(DomainError::invalid_format(format!(
                "DNI control letter mismatch: expected {expected}, got {given}"
            )));
        }

        Ok(())
    }
}
