//! `wrangle-schema` — Header vocabulary and mapping engine.
//!
//! Resolves provider-specific column headers to canonical attribute names
//! via a synonym dictionary, auto-maps source headers onto an output
//! template (exact → dictionary → fuzzy), and projects records through a
//! finished mapping for export.

pub mod dictionary;
pub mod error;
pub mod mapper;
pub mod template;

pub use dictionary::{SynonymDictionary, SynonymEntry};
pub use error::SchemaError;
pub use mapper::{auto_map, project, Mapping};
pub use template::{builtin_templates, templates_from_toml, TemplateSchema};
