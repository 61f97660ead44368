//! Field schema and request validation
//!
//! # Design Principles
//!
//! - The field table is static and ordered
//! - Validation collects every error
//! - No defaults or placeholders for failed fields

mod errors;
mod types;
mod validator;

pub use errors::{messages, FieldError};
pub use types::{field, field_names, FieldDef, FieldKind, FieldOption, FIELDS, FIELD_COUNT};
pub use validator::{check_field, validate, FeatureVector, RawFields};
