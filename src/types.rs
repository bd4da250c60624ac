//! Type Normalization
//!
//! Maps the raw type and args tokens of a property specification to a
//! canonical type tag and modifier. Aliases:
//!
//! | raw        | canonical | modifier  |
//! |------------|-----------|-----------|
//! | (empty)    | `string`  | unchanged |
//! | `integer`  | `int`     | unchanged |
//! | `bool`     | `boolean` | unchanged |
//! | `default`  | `string`  | `default` |
//! | `def`      | `string`  | `default` |
//!
//! Any other type token is an opaque type name and passes through verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Tag
// =============================================================================

/// Canonical type of a property after alias resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    String,
    Int,
    Boolean,
    /// Custom or engine-specific type name (`text`, `date`, `number`, ...)
    Other(String),
}

impl TypeTag {
    /// Build a tag from an already-canonical type name.
    ///
    /// No aliasing happens here: `integer` stays `Other("integer")`.
    /// Use [`normalize_type`] for raw tokens.
    pub fn from_canonical(name: &str) -> Self {
        match name {
            "string" => TypeTag::String,
            "int" => TypeTag::Int,
            "boolean" => TypeTag::Boolean,
            other => TypeTag::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Int => "int",
            TypeTag::Boolean => "boolean",
            TypeTag::Other(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" | "int" | "boolean" => TypeTag::from_canonical(&name),
            _ => TypeTag::Other(name),
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

// =============================================================================
// Modifier
// =============================================================================

/// The args token of a specification, after the `def` alias is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// No args token given
    None,
    /// Marks the property as the schema's default display property
    Default,
    /// Any other args token; carried but not interpreted
    Other(String),
}

impl Modifier {
    /// Interpret a raw args token. `def` is shorthand for `default`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "" => Modifier::None,
            "def" | "default" => Modifier::Default,
            other => Modifier::Other(other.to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Modifier::Default)
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Resolve a raw `(type, args)` token pair to its canonical form.
///
/// The args alias is applied first, then the type table; the `default`/`def`
/// pseudo-types force the modifier to [`Modifier::Default`] regardless of
/// what the args token said.
pub fn normalize_type(type_token: &str, args_token: &str) -> (TypeTag, Modifier) {
    let modifier = Modifier::from_token(args_token);

    match type_token {
        "" => (TypeTag::String, modifier),
        "integer" => (TypeTag::Int, modifier),
        "bool" => (TypeTag::Boolean, modifier),
        "default" | "def" => (TypeTag::String, Modifier::Default),
        other => (TypeTag::from_canonical(other), modifier),
    }
}
