//! JSON override adapter (layer 3)
//!
//! Parses the bulk-override blob and maps its top-level keys onto the
//! patch schema. Keys may arrive kebab-cased or snake-cased; they are
//! rewritten to camel-case before mapping. The adapter never fails: an
//! empty or unparsable blob contributes nothing.

use serde_json::Value;

use super::patch::OptionsPatch;

/// Rewrite a delimiter-separated key (`-` or `_`) to camel-case.
///
/// Keys that already are camel-case pass through unchanged.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Build the override patch from the raw blob.
///
/// Accepts only a top-level JSON object. Anything else — empty input,
/// malformed JSON, a non-object value, or an object whose values do not
/// fit the schema — yields an empty patch; the dropped layer is noted on
/// the diagnostics channel so a typo does not vanish silently.
pub fn patch_from_overrides(raw: &str) -> OptionsPatch {
    if raw.trim().is_empty() {
        return OptionsPatch::default();
    }

    let object = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            eprintln!("Ignoring override blob: not a JSON object");
            return OptionsPatch::default();
        }
    };

    let camelized: serde_json::Map<String, Value> = object
        .into_iter()
        .map(|(key, value)| (to_camel_case(&key), value))
        .collect();

    match serde_json::from_value(Value::Object(camelized)) {
        Ok(patch) => patch,
        Err(err) => {
            eprintln!("Ignoring override blob: {err}");
            OptionsPatch::default()
        }
    }
}
