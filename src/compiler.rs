//! Property Schema Compilation
//!
//! Turns the property arguments of a model generator (`username:string`,
//! `email:string:def`, ...) into a [`PropertySchema`] in a single pass:
//! parse each entry, normalize its type, then let the [`DefaultResolver`]
//! place it.
//!
//! Compilation is total. Invalid entries are dropped and an absent or empty
//! input yields the schema with only the `id` default.

use tracing::debug;

use crate::config::NamingConfig;
use crate::entry::RawEntry;
use crate::names::{Camelizer, IdentifierCase};
use crate::resolver::DefaultResolver;
use crate::schema::{PropertySchema, PropertySpec};
use crate::types::normalize_type;

/// Compile specification strings with the default camel-case transform.
///
/// ```
/// use model_properties::{compile_property_schema, TypeTag};
///
/// let schema = compile_property_schema(Some(["title:string", "views:integer"]));
/// assert_eq!(schema.default_property().name, "title");
/// assert_eq!(schema.get("views").unwrap().type_tag, TypeTag::Int);
/// ```
pub fn compile_property_schema<I, S>(specs: Option<I>) -> PropertySchema
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PropertyCompiler::default().compile(specs)
}

/// Property compiler with an injectable identifier transform
#[derive(Debug, Clone)]
pub struct PropertyCompiler<C = Camelizer> {
    case: C,
}

impl PropertyCompiler<Camelizer> {
    pub fn from_config(naming: &NamingConfig) -> Self {
        Self::new(Camelizer::new(naming))
    }
}

impl Default for PropertyCompiler<Camelizer> {
    fn default() -> Self {
        Self::new(Camelizer::default())
    }
}

impl<C: IdentifierCase> PropertyCompiler<C> {
    pub fn new(case: C) -> Self {
        Self { case }
    }

    pub fn compile<I, S>(&self, specs: Option<I>) -> PropertySchema
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolver = DefaultResolver::new();
        let Some(specs) = specs else {
            return resolver.finish();
        };

        for raw in specs {
            let raw = raw.as_ref();
            let Some(entry) = RawEntry::parse(raw) else {
                debug!(spec = raw, "skipping property with invalid name");
                continue;
            };

            let name = self.case.normalize_identifier(entry.name);
            let (type_tag, modifier) = normalize_type(entry.type_token, entry.args_token);
            resolver.apply(PropertySpec::new(name, type_tag), &modifier);
        }

        resolver.finish()
    }
}
