//! `hotel-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod sequence;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::Code;
pub use sequence::Sequence;
pub use validation::NationalIdValidator;
