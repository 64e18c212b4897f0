//! Customer registry: validation gate plus the code sequence.

use hotel_core::{DomainResult, NationalIdValidator, Sequence};

use crate::customer::Customer;
use crate::dni::SpanishDni;

static GLOBAL: CustomerRegistry<SpanishDni> = CustomerRegistry::new();

/// Owns the code sequence and the DNI validator used to build customers.
///
/// Registries are independent: each one numbers its customers from its own
/// sequence. [`CustomerRegistry::global`] is the process-wide instance behind
/// [`Customer::new`].
#[derive(Debug, Default)]
pub struct CustomerRegistry<V = SpanishDni> {
    sequence: Sequence,
    validator: V,
}

impl CustomerRegistry<SpanishDni> {
    /// Registry with the Spanish DNI rule and a fresh sequence.
    pub const fn new() -> Self {
        Self::with_validator(SpanishDni)
    }

    /// Process-wide registry; its counter starts at 0 when the process starts.
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

impl<V: NationalIdValidator> CustomerRegistry<V> {
    pub const fn with_validator(validator: V) -> Self {
        Self {
            sequence: Sequence::new(),
            validator,
        }
    }

    /// Continue numbering after `last`: the next customer gets `last + 1`.
    pub fn starting_at(self, last: u64) -> Self {
        self.sequence.reset(last);
        self
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validate the DNI and, only if it passes, build a customer with the next code.
    pub fn register(
        &self,
        name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Customer> {
        let national_id = national_id.into();

        if let Err(err) = self.validator.validate(&national_id) {
            tracing::debug!(error = %err, "customer rejected");
            return Err(err);
        }

        let name = name.into();
        let phone = phone.into();
        let code = self.sequence.next();
        tracing::debug!(code = code.get(), "customer registered");

        Ok(Customer::assemble(code, name, national_id, phone))
    }

    /// Last code handed out (equals the number of registrations since creation
    /// or the last reset).
    pub fn count(&self) -> u64 {
        self.sequence.current()
    }

    /// Overwrite the counter.
    ///
    /// Intended for tests and data migrations. Existing customers keep their
    /// codes, so lowering the value makes later codes collide with them.
    pub fn reset_count(&self, last: u64) {
        let previous = self.sequence.reset(last);
        tracing::warn!(previous, last, "customer counter reset");
    }
}
