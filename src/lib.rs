//! Model Property Schemas
//!
//! Compiles the terse property arguments of a model generator into a
//! normalized schema of the model's fields.
//!
//! ```text
//! ["username:string", "email:string:def", "active:bool"]
//!
//! {
//!   "default":  {"name": "email",    "type": "string"},
//!   "id":       {"name": "id",       "type": "string"},
//!   "username": {"name": "username", "type": "string"},
//!   "active":   {"name": "active",   "type": "boolean"}
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **entry**: split `name[:type[:args]]`, drop names starting with `_` or `-`
//! - **types**: apply the type aliases (`integer` → `int`, `bool` → `boolean`, ...)
//! - **resolver**: track and reassign the single `default` display property
//!
//! The compiler never touches the filesystem. Sourcing the arguments and
//! rendering the schema into files is left to the caller.

pub mod compiler;
pub mod config;
pub mod entry;
pub mod error;
pub mod names;
pub mod resolver;
pub mod schema;
pub mod types;

pub use compiler::{compile_property_schema, PropertyCompiler};
pub use config::{NamingConfig, OutputFormat, PropertiesConfig};
pub use error::{PropertyError, Result};
pub use names::{Camelizer, IdentifierCase};
pub use resolver::{DefaultResolver, Transition};
pub use schema::{PropertySchema, PropertySpec, DEFAULT_KEY};
pub use types::{Modifier, TypeTag};
