//! Property schema types
//!
//! A [`PropertySchema`] maps property names to [`PropertySpec`]s. The key
//! `"default"` is reserved: it always holds the model's default display
//! property and is never absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::OutputFormat;
use crate::error::{PropertyError, Result};
use crate::types::TypeTag;

/// Reserved key under which the default display property is stored
pub const DEFAULT_KEY: &str = "default";

/// Name of the synthetic default every schema starts with
pub const ID_PROPERTY: &str = "id";

/// A single named, typed property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }

    /// The `{name: "id", type: "string"}` default of an empty schema
    pub fn initial_default() -> Self {
        Self::new(ID_PROPERTY, TypeTag::String)
    }
}

/// Normalized property schema for one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertySchema {
    entries: BTreeMap<String, PropertySpec>,
}

impl PropertySchema {
    /// Schema holding only the initial `id` default
    pub fn new() -> Self {
        Self::with_default(PropertySpec::initial_default())
    }

    fn with_default(default: PropertySpec) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_KEY.to_string(), default);
        Self { entries }
    }

    /// The current default display property
    pub fn default_property(&self) -> &PropertySpec {
        // Every constructor and mutation keeps the reserved key populated
        &self.entries[DEFAULT_KEY]
    }

    /// Look up an entry by key, including the reserved `"default"` key
    pub fn get(&self, key: &str) -> Option<&PropertySpec> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Named properties, excluding the reserved default slot
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.as_str() != DEFAULT_KEY)
            .map(|(key, spec)| (key.as_str(), spec))
    }

    /// Number of keys, counting the reserved default slot
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the default slot is never empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self, format: OutputFormat) -> Result<String> {
        let json = match format {
            OutputFormat::Pretty => serde_json::to_string_pretty(self)?,
            OutputFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, PropertySpec> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: BTreeMap<String, PropertySpec>) -> Result<Self> {
        if !entries.contains_key(DEFAULT_KEY) {
            return Err(PropertyError::MissingDefault);
        }

        // Every key other than the reserved slot is its property's own name
        if let Some((key, spec)) = entries
            .iter()
            .find(|(key, spec)| key.as_str() != DEFAULT_KEY && **key != spec.name)
        {
            return Err(PropertyError::KeyMismatch {
                key: key.clone(),
                name: spec.name.clone(),
            });
        }

        Ok(Self { entries })
    }

    // Mutation is limited to the resolver, which upholds the default invariant.

    pub(crate) fn set_default(&mut self, spec: PropertySpec) {
        self.entries.insert(DEFAULT_KEY.to_string(), spec);
    }

    /// Write `spec` under its own name, replacing any previous entry.
    ///
    /// A spec literally named `default` lands in the reserved slot.
    pub(crate) fn insert(&mut self, spec: PropertySpec) {
        self.entries.insert(spec.name.clone(), spec);
    }

    /// Write `spec` under its own name only if that key is free
    pub(crate) fn insert_if_absent(&mut self, spec: PropertySpec) {
        self.entries.entry(spec.name.clone()).or_insert(spec);
    }

    /// Remove a named entry. The reserved slot is never removed.
    pub(crate) fn remove(&mut self, key: &str) -> Option<PropertySpec> {
        if key == DEFAULT_KEY {
            return None;
        }
        self.entries.remove(key)
    }
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for PropertySchema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<String, PropertySpec>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
