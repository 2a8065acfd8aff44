//! Three-layer resolution with provenance
//!
//! Builds the run's options from defaults, named inputs, and the JSON
//! override blob, validates the result, and records where each layer came
//! from. The fingerprint is the SHA-256 of the record's RFC 8785 (JCS)
//! form, so identical configurations hash identically regardless of key
//! order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::context::RepoContext;
use crate::filter;

use super::defaults::Options;
use super::inputs::{patch_from_inputs, InputSource, JSON_OVERRIDES_INPUT};
use super::overrides::patch_from_overrides;
use super::validate::{validate, OptionsError};

/// Schema version for the serialized resolution.
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier.
pub const SCHEMA_ID: &str = "stale-sweep/resolved_options@1";

/// Origin of one contributing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    Defaults,
    Inputs,
    Overrides,
}

/// A contributing layer, in precedence order.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRecord {
    pub origin: SourceOrigin,

    /// SHA-256 of the raw override blob; the other layers have no single
    /// raw form to digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// The merged, validated configuration plus its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedOptions {
    pub schema_version: u32,
    pub schema_id: String,
    pub resolved_at: DateTime<Utc>,
    pub options: Options,
    pub sources: Vec<SourceRecord>,
    pub fingerprint: String,
}

impl ResolvedOptions {
    /// Resolve and validate from one input source.
    ///
    /// The override blob is itself carried as a named input
    /// (`json-overrides`), so a single source feeds both adapters.
    pub fn resolve(inputs: &dyn InputSource) -> Result<Self, OptionsError> {
        let input_patch = patch_from_inputs(inputs);

        let raw_overrides = inputs.raw(JSON_OVERRIDES_INPUT).unwrap_or_default();
        let override_patch = patch_from_overrides(&raw_overrides);

        let options = Options::merged([input_patch, override_patch]);
        validate(&options)?;

        let mut sources = vec![
            SourceRecord {
                origin: SourceOrigin::Defaults,
                digest: None,
            },
            SourceRecord {
                origin: SourceOrigin::Inputs,
                digest: None,
            },
        ];
        if !raw_overrides.trim().is_empty() {
            sources.push(SourceRecord {
                origin: SourceOrigin::Overrides,
                digest: Some(sha256_hex(raw_overrides.as_bytes())),
            });
        }

        let fingerprint = options_fingerprint(&options)?;

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            resolved_at: Utc::now(),
            options,
            sources,
            fingerprint,
        })
    }

    /// Compile the filter list in place against the given repository.
    ///
    /// The compiled terms replace the raw ones; this is the last mutation
    /// the record sees before the processor reads it.
    pub fn compile_filters(&mut self, repo: &RepoContext) {
        self.options.only_matching_filter = filter::compile(&self.options.only_matching_filter, repo);
    }

    /// Pretty JSON for the diagnostics channel, token redacted.
    pub fn redacted_json(&self) -> Result<String, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        redact_token(&mut value);
        serde_json::to_string_pretty(&value)
    }
}

/// SHA-256 hex of the JCS form of the record.
///
/// Non-finite sentinels serialize as JSON null, which JCS accepts; hashing
/// goes through the `Value` form for that reason.
pub fn options_fingerprint(options: &Options) -> Result<String, OptionsError> {
    let value = serde_json::to_value(options)?;
    let jcs = serde_json_canonicalizer::to_vec(&value)
        .map_err(|e| OptionsError::Canonicalize(e.to_string()))?;
    Ok(sha256_hex(&jcs))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn redact_token(value: &mut Value) {
    if let Some(token) = value.pointer_mut("/options/repoToken") {
        if token.as_str().is_some_and(|t| !t.is_empty()) {
            *token = Value::String("[REDACTED]".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::inputs::MapInputs;

    #[test]
    fn test_resolve_defaults_only() {
        let resolved = ResolvedOptions::resolve(&MapInputs::new()).unwrap();
        assert_eq!(resolved.schema_version, SCHEMA_VERSION);
        assert_eq!(resolved.options.days_before_stale, 60.0);
        assert_eq!(resolved.sources.len(), 2);
        assert_eq!(resolved.sources[0].origin, SourceOrigin::Defaults);
        assert_eq!(resolved.sources[1].origin, SourceOrigin::Inputs);
    }

    #[test]
    fn test_override_layer_recorded_with_digest() {
        let inputs = MapInputs::new().set(JSON_OVERRIDES_INPUT, r#"{"ascending": true}"#);
        let resolved = ResolvedOptions::resolve(&inputs).unwrap();
        assert!(resolved.options.ascending);
        let overrides = &resolved.sources[2];
        assert_eq!(overrides.origin, SourceOrigin::Overrides);
        let digest = overrides.digest.as_deref().unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_resolve_rejects_invalid_merge() {
        let inputs = MapInputs::new().set("close-issue-reason", "archived");
        let err = ResolvedOptions::resolve(&inputs).unwrap_err();
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = options_fingerprint(&Options::default()).unwrap();
        let b = options_fingerprint(&Options::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let base = options_fingerprint(&Options::default()).unwrap();
        let changed = options_fingerprint(&Options {
            days_before_stale: 61.0,
            ..Options::default()
        })
        .unwrap();
        assert_ne!(base, changed);
    }

    #[test]
    fn test_redacted_json_hides_token() {
        let inputs = MapInputs::new().set("repo-token", "ghp_secret");
        let resolved = ResolvedOptions::resolve(&inputs).unwrap();
        let json = resolved.redacted_json().unwrap();
        assert!(!json.contains("ghp_secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn test_redacted_json_leaves_empty_token() {
        let resolved = ResolvedOptions::resolve(&MapInputs::new()).unwrap();
        let json = resolved.redacted_json().unwrap();
        assert!(!json.contains("[REDACTED]"));
    }

    #[test]
    fn test_compile_filters_in_place() {
        let inputs = MapInputs::new().set("only-matching-filter", "label:bug");
        let mut resolved = ResolvedOptions::resolve(&inputs).unwrap();
        resolved.compile_filters(&RepoContext::new("acme", "widgets"));
        assert_eq!(
            resolved.options.only_matching_filter,
            vec!["repo:acme/widgets label:bug is:open".to_string()]
        );
    }
}
