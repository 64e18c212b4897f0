//! Hotel customers domain module.
//!
//! Customers are sequentially numbered records (name, DNI, phone). A
//! [`CustomerRegistry`] gates construction on a DNI format check and hands out
//! the codes. Pure domain logic: no IO, no storage.

pub mod customer;
pub mod dni;
pub mod registry;

pub use customer::Customer;
pub use dni::SpanishDni;
pub use registry::CustomerRegistry;
