//! Format predicates applied before an entity is allowed to exist.

use crate::error::DomainResult;

/// Checks that a national identity number is well formed.
///
/// Implementations return `DomainError::InvalidFormat` with a human-readable
/// reason on rejection. Any `Fn(&str) -> DomainResult<()>` is a validator too,
/// which is handy for injecting fixed outcomes in tests.
pub trait NationalIdValidator {
    fn validate(&self, national_id: &str) -> DomainResult<()>;
}

impl<F> NationalIdValidator for F
where
    F: Fn(&str) -> DomainResult<()>,
{
    fn validate(&self, national_id: &str) -> DomainResult<()> {
        self(national_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn closures_act_as_validators() {
        let only_digits = |id: &str| {
            if id.chars().all(|c| c.is_ascii_digit()) {
                Ok(())
            } else {
                Err(DomainError::invalid_format("digits only"))
            }
        };

        assert!(only_digits.validate("123").is_ok());
        assert_eq!(
            only_digits.validate("12a"),
            Err(DomainError::InvalidFormat("digits only".to_string()))
        );
    }
}
