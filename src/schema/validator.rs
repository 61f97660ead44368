//! Request validation and feature-vector assembly
//!
//! Validation semantics:
//! - Fields are checked in canonical order
//! - Every failing field contributes exactly one error
//! - Errors never short-circuit the remaining fields
//! - Failing fields get no placeholder in the output

use std::collections::{BTreeMap, HashMap};
use std::num::{IntErrorKind, ParseIntError};

use super::errors::FieldError;
use super::types::{FieldDef, FieldKind, FIELDS, FIELD_COUNT};

/// Source of raw, unparsed field values keyed by field name.
pub trait RawFields {
    /// Returns the raw value submitted for `name`, if any
    fn raw(&self, name: &str) -> Option<&str>;
}

impl RawFields for HashMap<String, String> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawFields for BTreeMap<String, String> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl RawFields for [(&str, &str)] {
    fn raw(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

/// Model input in canonical field order.
///
/// Only the validator constructs one, so the length always matches the
/// schema and every value satisfies its descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Vec<i64>);

impl FeatureVector {
    /// Values in canonical order
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated vector
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values widened for numeric model code
    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&v| v as f64).collect()
    }

    /// Pairs each value with its field name
    pub fn named(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        FIELDS.iter().map(|f| f.name).zip(self.0.iter().copied())
    }
}

/// Validates raw inputs against the field schema.
///
/// Returns the ordered feature vector, or every error found.
pub fn validate<R: RawFields + ?Sized>(raw: &R) -> Result<FeatureVector, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(FIELD_COUNT);

    for def in FIELDS.iter() {
        match check_field(def, raw.raw(def.name)) {
            Ok(v) => values.push(v),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        debug_assert_eq!(values.len(), FIELD_COUNT);
        Ok(FeatureVector(values))
    } else {
        Err(errors)
    }
}

/// Validates a single raw value against its descriptor.
pub fn check_field(def: &FieldDef, raw: Option<&str>) -> Result<i64, FieldError> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Err(FieldError::MissingField { field: def.name }),
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|e: ParseIntError| overflow_error(def, e.kind()))?;

    if let Some((min, max)) = def.kind.bounds() {
        if !(min..=max).contains(&value) {
            return Err(FieldError::OutOfBounds {
                field: def.name,
                min,
                max,
            });
        }
    }

    if !def.allows(value) {
        return Err(FieldError::InvalidOption { field: def.name });
    }

    Ok(value)
}

/// An integer too wide for `i64` is still an integer: it fails the
/// field's own constraint rather than the integer check.
fn overflow_error(def: &FieldDef, kind: &IntErrorKind) -> FieldError {
    let overflowed = matches!(kind, IntErrorKind::PosOverflow | IntErrorKind::NegOverflow);
    match def.kind {
        FieldKind::Numeric { min, max } if overflowed => FieldError::OutOfBounds {
            field: def.name,
            min,
            max,
        },
        FieldKind::Categorical { .. } if overflowed => {
            FieldError::InvalidOption { field: def.name }
        }
        _ => FieldError::NotAnInteger { field: def.name },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::errors::messages;

    fn valid_input() -> HashMap<String, String> {
        [
            ("Age", "45"),
            ("Race", "1"),
            ("Marital", "1"),
            ("Tstage", "2"),
            ("Nstage", "1"),
            ("Stage6", "2"),
            ("Diff", "1"),
            ("Grade", "2"),
            ("Astage", "1"),
            ("Tumor", "30"),
            ("Estrogen", "1"),
            ("Progesterone", "1"),
            ("Examined", "10"),
            ("Positive", "2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_valid_input_in_canonical_order() {
        let vector = validate(&valid_input()).unwrap();
        assert_eq!(
            vector.as_slice(),
            &[45, 1, 1, 2, 1, 2, 1, 2, 1, 30, 1, 1, 10, 2]
        );
        assert_eq!(vector.len(), FIELD_COUNT);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut input = valid_input();
        input.insert("Age".into(), "abc".into());
        input.insert("Tumor".into(), "500".into());

        let errors = validate(&input).unwrap_err();
        assert_eq!(
            messages(&errors),
            vec!["Age must be an integer", "Tumor must be between 0 and 200"]
        );
    }

    #[test]
    fn test_missing_and_empty_are_required() {
        let mut input = valid_input();
        input.remove("Diff");
        input.insert("Grade".into(), String::new());

        let errors = validate(&input).unwrap_err();
        assert_eq!(messages(&errors), vec!["Diff is required", "Grade is required"]);
    }

    #[test]
    fn test_invalid_option() {
        let mut input = valid_input();
        input.insert("Grade".into(), "0".into());
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec![FieldError::InvalidOption { field: "Grade" }]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let def = crate::schema::field("Age").unwrap();
        assert_eq!(check_field(def, Some("18")), Ok(18));
        assert_eq!(check_field(def, Some("120")), Ok(120));
        assert!(check_field(def, Some("17")).is_err());
        assert!(check_field(def, Some("121")).is_err());
    }

    #[test]
    fn test_whitespace_handling() {
        let def = crate::schema::field("Tumor").unwrap();
        assert_eq!(check_field(def, Some(" 30 ")), Ok(30));
        assert_eq!(
            check_field(def, Some("   ")),
            Err(FieldError::NotAnInteger { field: "Tumor" })
        );
    }

    #[test]
    fn test_decimal_is_not_an_integer() {
        let def = crate::schema::field("Tumor").unwrap();
        assert_eq!(
            check_field(def, Some("30.0")),
            Err(FieldError::NotAnInteger { field: "Tumor" })
        );
    }

    #[test]
    fn test_overflowing_integer_fails_field_constraint() {
        let tumor = crate::schema::field("Tumor").unwrap();
        assert_eq!(
            check_field(tumor, Some("99999999999999999999")),
            Err(FieldError::OutOfBounds {
                field: "Tumor",
                min: 0,
                max: 200
            })
        );
        assert_eq!(
            check_field(tumor, Some("-99999999999999999999")),
            Err(FieldError::OutOfBounds {
                field: "Tumor",
                min: 0,
                max: 200
            })
        );

        let grade = crate::schema::field("Grade").unwrap();
        assert_eq!(
            check_field(grade, Some("99999999999999999999")),
            Err(FieldError::InvalidOption { field: "Grade" })
        );

        let scratch = FieldDef::integer("Scratch");
        assert_eq!(
            check_field(&scratch, Some("99999999999999999999")),
            Err(FieldError::NotAnInteger { field: "Scratch" })
        );
    }

    #[test]
    fn test_unconstrained_field() {
        let def = FieldDef::integer("Scratch");
        assert_eq!(check_field(&def, Some("-99999")), Ok(-99999));
    }

    #[test]
    fn test_slice_source() {
        let raw: &[(&str, &str)] = &[("Age", "50")];
        let errors = validate(raw).unwrap_err();
        assert_eq!(errors.len(), FIELD_COUNT - 1);
        assert!(errors.iter().all(|e| e.field() != "Age"));
    }

    #[test]
    fn test_named_pairs() {
        let vector = validate(&valid_input()).unwrap();
        let first = vector.named().next().unwrap();
        assert_eq!(first, ("Age", 45));
    }
}
