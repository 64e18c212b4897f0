use serde::{Deserialize, Serialize};

use hotel_core::{Code, DomainResult, Entity};

use crate::registry::CustomerRegistry;

/// Entity: a hotel customer.
///
/// Customers only come into existence through a [`CustomerRegistry`], which
/// checks the national ID and hands out the next sequential code. After that
/// the record is a plain mutable value: none of the setters validate, and that
/// includes [`Customer::set_national_id`].
///
/// Deserializing restores a stored record as-is; it neither validates nor
/// consumes a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    code: Code,
    name: String,
    national_id: String,
    phone: String,
}

impl Customer {
    /// Register a customer in the process-wide registry.
    ///
    /// Fails with `DomainError::InvalidFormat` when the DNI is malformed; in
    /// that case the shared counter is left untouched.
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        CustomerRegistry::global().register(name, national_id, phone)
    }

    /// Last code issued by the process-wide registry.
    pub fn count() -> u64 {
        CustomerRegistry::global().count()
    }

    /// Overwrite the process-wide counter. Test seam; see
    /// [`CustomerRegistry::reset_count`].
    pub fn reset_count(last: u64) {
        CustomerRegistry::global().reset_count(last);
    }

    /// Assemble an already validated record.
    pub(crate) fn assemble(code: Code, name: String, national_id: String, phone: String) -> Self {
        Self {
            code,
            name,
            national_id,
            phone,
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    /// Replace the stored DNI. The new value is not validated.
    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        self.national_id = national_id.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Human-readable one-line summary (code, name, DNI, phone).
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Código: {}, Nombre: {}, DNI: {}, Teléfono: {}",
            self.code, self.name, self.national_id, self.phone
        )
    }
}

impl Entity for Customer {
    type Id = Code;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
