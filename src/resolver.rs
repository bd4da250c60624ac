//! Default Property Resolution
//!
//! Every schema has exactly one default display property. It starts as a
//! synthetic `id: string` and is reassigned as entries arrive:
//!
//! 1. an entry marked `default` takes the slot;
//! 2. an `id` entry replaces the synthetic `id` default, as long as nothing
//!    has displaced it yet;
//! 3. a `name` or `title` entry takes the slot, even over an explicit default;
//! 4. anything else is an ordinary property.
//!
//! The first matching rule wins. A displaced default is kept under its own
//! name, unless that name is already taken.

use tracing::trace;

use crate::schema::{PropertySchema, PropertySpec, ID_PROPERTY};
use crate::types::Modifier;

/// Names that claim the default slot by convention
const DISPLAY_NAMES: [&str; 2] = ["name", "title"];

/// What an entry does to the schema, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Marked `default` via its args or type token
    ExplicitDefault,
    /// `id` while the default is still the `id` property
    IdDefault,
    /// `name` or `title`
    DisplayDefault,
    /// Plain property, leaves the default alone
    Ordinary,
}

impl Transition {
    /// Pick the rule for `spec`, given the current default
    pub fn classify(spec: &PropertySpec, modifier: &Modifier, current: &PropertySpec) -> Self {
        if modifier.is_default() {
            Transition::ExplicitDefault
        } else if spec.name == ID_PROPERTY && current.name == ID_PROPERTY {
            Transition::IdDefault
        } else if DISPLAY_NAMES.contains(&spec.name.as_str()) {
            Transition::DisplayDefault
        } else {
            Transition::Ordinary
        }
    }
}

/// Accumulates entries into a schema, tracking the default slot
#[derive(Debug, Default)]
pub struct DefaultResolver {
    schema: PropertySchema,
}

impl DefaultResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schema built so far
    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    /// Fold one normalized entry into the schema
    pub fn apply(&mut self, spec: PropertySpec, modifier: &Modifier) -> Transition {
        let transition = Transition::classify(&spec, modifier, self.schema.default_property());
        trace!(name = %spec.name, type_tag = %spec.type_tag, ?transition, "applying property");

        match transition {
            Transition::ExplicitDefault => {
                let outgoing = self.schema.default_property().clone();
                if spec.name != outgoing.name {
                    self.schema.remove(&spec.name);
                    self.schema.insert_if_absent(outgoing);
                }
                self.schema.set_default(spec);
            }
            Transition::IdDefault => {
                self.schema.set_default(spec);
            }
            Transition::DisplayDefault => {
                let outgoing = self.schema.default_property().clone();
                self.schema.insert_if_absent(outgoing);
                self.schema.set_default(spec);
            }
            Transition::Ordinary => {
                self.schema.insert(spec);
            }
        }

        transition
    }

    pub fn finish(self) -> PropertySchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    fn spec(name: &str, type_tag: TypeTag) -> PropertySpec {
        PropertySpec::new(name, type_tag)
    }

    #[test]
    fn test_classify_priority() {
        let id = PropertySpec::initial_default();
        let title = spec("title", TypeTag::String);

        // Explicit marker beats every naming rule
        assert_eq!(
            Transition::classify(&spec("id", TypeTag::Int), &Modifier::Default, &id),
            Transition::ExplicitDefault
        );
        assert_eq!(
            Transition::classify(&spec("name", TypeTag::String), &Modifier::Default, &id),
            Transition::ExplicitDefault
        );
        assert_eq!(
            Transition::classify(&spec("id", TypeTag::Int), &Modifier::None, &id),
            Transition::IdDefault
        );
        assert_eq!(
            Transition::classify(&spec("id", TypeTag::Int), &Modifier::None, &title),
            Transition::Ordinary
        );
        assert_eq!(
            Transition::classify(&spec("title", TypeTag::String), &Modifier::None, &title),
            Transition::DisplayDefault
        );
        assert_eq!(
            Transition::classify(&spec("email", TypeTag::String), &Modifier::Other("x".into()), &id),
            Transition::Ordinary
        );
    }

    #[test]
    fn test_explicit_default_promotes_outgoing() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("a", TypeTag::String), &Modifier::None);
        resolver.apply(spec("b", TypeTag::String), &Modifier::Default);

        let schema = resolver.finish();
        assert_eq!(schema.default_property(), &spec("b", TypeTag::String));
        assert_eq!(schema.get("a"), Some(&spec("a", TypeTag::String)));
        assert_eq!(schema.get("id"), Some(&PropertySpec::initial_default()));
        assert!(!schema.contains("b"));
    }

    #[test]
    fn test_schema_reflects_progress() {
        let mut resolver = DefaultResolver::new();
        assert_eq!(resolver.schema(), &PropertySchema::new());

        resolver.apply(spec("title", TypeTag::String), &Modifier::None);
        assert_eq!(resolver.schema().default_property().name, "title");
        assert!(resolver.schema().contains("id"));
    }

    #[test]
    fn test_explicit_default_removes_existing_entry() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("email", TypeTag::Other("text".into())), &Modifier::None);
        resolver.apply(spec("email", TypeTag::String), &Modifier::Default);

        let schema = resolver.finish();
        assert!(!schema.contains("email"));
        assert_eq!(schema.default_property(), &spec("email", TypeTag::String));
    }

    #[test]
    fn test_explicit_default_same_name_only_retypes() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("id", TypeTag::Int), &Modifier::Default);

        let schema = resolver.finish();
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.default_property(), &spec("id", TypeTag::Int));
    }

    #[test]
    fn test_promotion_does_not_overwrite_existing() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("a", TypeTag::String), &Modifier::Default);
        resolver.apply(spec("a", TypeTag::Int), &Modifier::None);
        resolver.apply(spec("b", TypeTag::String), &Modifier::Default);

        // `a` was written as an ordinary entry first; promotion keeps that write
        let schema = resolver.finish();
        assert_eq!(schema.get("a"), Some(&spec("a", TypeTag::Int)));
        assert_eq!(schema.default_property(), &spec("b", TypeTag::String));
    }

    #[test]
    fn test_display_name_overrides_explicit_default() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("a", TypeTag::String), &Modifier::Default);
        let transition = resolver.apply(spec("name", TypeTag::String), &Modifier::None);

        assert_eq!(transition, Transition::DisplayDefault);
        let schema = resolver.finish();
        assert_eq!(schema.default_property(), &spec("name", TypeTag::String));
        assert_eq!(schema.get("a"), Some(&spec("a", TypeTag::String)));
    }

    #[test]
    fn test_display_name_promotion_keeps_existing() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("a", TypeTag::String), &Modifier::Default);
        resolver.apply(spec("a", TypeTag::Int), &Modifier::None);
        resolver.apply(spec("title", TypeTag::String), &Modifier::None);

        let schema = resolver.finish();
        assert_eq!(schema.get("a"), Some(&spec("a", TypeTag::Int)));
        assert_eq!(schema.default_property(), &spec("title", TypeTag::String));
    }

    #[test]
    fn test_default_named_default_keeps_outgoing() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("default", TypeTag::String), &Modifier::Default);

        let schema = resolver.finish();
        assert_eq!(schema.default_property(), &spec("default", TypeTag::String));
        assert_eq!(schema.get("id"), Some(&PropertySpec::initial_default()));
    }

    #[test]
    fn test_ordinary_default_name_takes_slot() {
        let mut resolver = DefaultResolver::new();
        resolver.apply(spec("default", TypeTag::Int), &Modifier::None);

        let schema = resolver.finish();
        assert_eq!(schema.default_property(), &spec("default", TypeTag::Int));
        assert_eq!(schema.len(), 1);
    }
}
