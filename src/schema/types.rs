//! Field schema for the survival model
//!
//! The table below is the model's input layout:
//! - One descriptor per model input
//! - Declaration order is the canonical feature order
//! - Never reorder without re-validating the model file

use serde::Serialize;

/// An encoded categorical value and the label shown to users
pub type FieldOption = (i64, &'static str);

/// Constraint attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Integer within an inclusive range
    Numeric {
        min: i64,
        max: i64,
    },
    /// One of an enumerated set of encoded values
    Categorical {
        #[serde(serialize_with = "serialize_options")]
        options: &'static [FieldOption],
    },
    /// Any integer
    Integer,
}

impl FieldKind {
    /// Returns the type name for listings
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Numeric { .. } => "numeric",
            FieldKind::Categorical { .. } => "categorical",
            FieldKind::Integer => "integer",
        }
    }

    /// Inclusive bounds, if the field has them
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match *self {
            FieldKind::Numeric { min, max } => Some((min, max)),
            _ => None,
        }
    }

    /// Encoded options, if the field is categorical
    pub fn options(&self) -> Option<&'static [FieldOption]> {
        match *self {
            FieldKind::Categorical { options } => Some(options),
            _ => None,
        }
    }
}

fn serialize_options<S>(options: &&'static [FieldOption], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    #[derive(Serialize)]
    struct Entry {
        value: i64,
        label: &'static str,
    }

    let mut seq = serializer.serialize_seq(Some(options.len()))?;
    for &(value, label) in options.iter() {
        seq.serialize_element(&Entry { value, label })?;
    }
    seq.end()
}

/// Field descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Field name as submitted by clients
    pub name: &'static str,
    /// Constraint on the parsed value
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDef {
    /// Create a bounded numeric field
    pub const fn numeric(name: &'static str, min: i64, max: i64) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric { min, max },
        }
    }

    /// Create a categorical field
    pub const fn categorical(name: &'static str, options: &'static [FieldOption]) -> Self {
        Self {
            name,
            kind: FieldKind::Categorical { options },
        }
    }

    /// Create an unconstrained integer field
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    /// Checks whether a parsed value is one of the declared options.
    ///
    /// Fields without options accept every value.
    pub fn allows(&self, value: i64) -> bool {
        match self.kind.options() {
            Some(options) => options.iter().any(|&(v, _)| v == value),
            None => true,
        }
    }

    /// Display label for an encoded value
    pub fn label_for(&self, value: i64) -> Option<&'static str> {
        self.kind
            .options()?
            .iter()
            .find(|&&(v, _)| v == value)
            .map(|&(_, label)| label)
    }
}

const RACE: &[FieldOption] = &[(0, "Race 0"), (1, "Race 1"), (2, "Race 2"), (3, "Race 3")];
const MARITAL: &[FieldOption] = &[(0, "Single"), (1, "Married"), (2, "Other")];
const T_STAGE: &[FieldOption] = &[(0, "T0"), (1, "T1"), (2, "T2"), (3, "T3")];
const N_STAGE: &[FieldOption] = &[(0, "N0"), (1, "N1"), (2, "N2"), (3, "N3")];
const STAGE_6: &[FieldOption] = &[
    (0, "Stage 0"),
    (1, "Stage I"),
    (2, "Stage II"),
    (3, "Stage III"),
    (4, "Stage IV"),
];
const DIFFERENTIATION: &[FieldOption] = &[
    (0, "Differentiation 0"),
    (1, "Differentiation 1"),
    (2, "Differentiation 2"),
];
const GRADE: &[FieldOption] = &[(1, "Grade I"), (2, "Grade II"), (3, "Grade III")];
const A_STAGE: &[FieldOption] = &[(0, "A0"), (1, "A1"), (2, "A2")];
const RECEPTOR: &[FieldOption] = &[(0, "Negative"), (1, "Positive")];

/// Number of model inputs
pub const FIELD_COUNT: usize = 14;

/// Every accepted field, in canonical model order
pub static FIELDS: [FieldDef; FIELD_COUNT] = [
    FieldDef::numeric("Age", 18, 120),
    FieldDef::categorical("Race", RACE),
    FieldDef::categorical("Marital", MARITAL),
    FieldDef::categorical("Tstage", T_STAGE),
    FieldDef::categorical("Nstage", N_STAGE),
    FieldDef::categorical("Stage6", STAGE_6),
    FieldDef::categorical("Diff", DIFFERENTIATION),
    FieldDef::categorical("Grade", GRADE),
    FieldDef::categorical("Astage", A_STAGE),
    FieldDef::numeric("Tumor", 0, 200),
    FieldDef::categorical("Estrogen", RECEPTOR),
    FieldDef::categorical("Progesterone", RECEPTOR),
    FieldDef::numeric("Examined", 0, 1000),
    FieldDef::numeric("Positive", 0, 1000),
];

/// Looks up a field descriptor by name
pub fn field(name: &str) -> Option<&'static FieldDef> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Field names in canonical order
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.name)
}
