//! Options resolution
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in defaults
//! 2. Named action inputs (kebab-case keys, typed coercion)
//! 3. JSON override blob (bulk overrides, camel-cased keys)
//!
//! followed by fail-fast validation of the merged record.

mod defaults;
mod inputs;
mod merge;
mod overrides;
mod patch;
mod resolve;
mod validate;

pub use defaults::{Options, CLOSE_REASONS};
pub use inputs::{patch_from_inputs, EnvInputs, InputSource, MapInputs, JSON_OVERRIDES_INPUT};
pub use overrides::{patch_from_overrides, to_camel_case};
pub use patch::OptionsPatch;
pub use resolve::{
    options_fingerprint, ResolvedOptions, SourceOrigin, SourceRecord, SCHEMA_ID, SCHEMA_VERSION,
};
pub use validate::{validate, OptionsError};
