//! Schema-checked decoding of response bodies.
//!
//! Decoding is all-or-nothing: a payload either maps onto the model in full
//! or yields a [`SchemaMismatch`]. When serde rejects a payload, the body is
//! walked again as a `serde_json::Value` to name the first offending field.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::pet::{Category, Tag};
use crate::status::Status;

/// Path used for errors that concern the whole document.
pub const ROOT: &str = "$";

/// A response body that does not fit the resource model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema mismatch at `{field}`: {reason}")]
pub struct SchemaMismatch {
    /// Path of the offending field, e.g. `name`, `tags[0].id`, `[2].status`.
    pub field: String,
    pub reason: String,
}

impl SchemaMismatch {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Deserialize `bytes` as `T`, using `locate` to name the field on failure.
pub(crate) fn decode<T>(
    bytes: &[u8],
    locate: fn(&Value, &str) -> Option<SchemaMismatch>,
) -> Result<T, SchemaMismatch>
where
    T: DeserializeOwned,
{
    let err = match serde_json::from_slice::<T>(bytes) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    // Not JSON at all: nothing to walk.
    let Ok(value) = serde_json::from_slice::<Value>(bytes) else {
        return Err(SchemaMismatch::new(ROOT, err.to_string()));
    };
    Err(locate(&value, "").unwrap_or_else(|| SchemaMismatch::new(ROOT, err.to_string())))
}

pub(crate) fn locate_pet_list(value: &Value, path: &str) -> Option<SchemaMismatch> {
    let Some(items) = value.as_array() else {
        return Some(SchemaMismatch::new(
            display_path(path),
            format!("expected an array of pets, found {}", kind(value)),
        ));
    };
    items
        .iter()
        .enumerate()
        .find_map(|(i, item)| locate_pet(item, &format!("{path}[{i}]")))
}

pub(crate) fn locate_pet(value: &Value, path: &str) -> Option<SchemaMismatch> {
    let Some(obj) = value.as_object() else {
        return Some(SchemaMismatch::new(
            display_path(path),
            format!("expected a pet object, found {}", kind(value)),
        ));
    };
    optional::<i64>(obj, path, "id")
        .or_else(|| optional_with(obj, path, "category", locate_label::<Category>))
        .or_else(|| required::<String>(obj, path, "name"))
        .or_else(|| list(obj, path, "photoUrls", probe::<String>))
        .or_else(|| list(obj, path, "tags", locate_label::<Tag>))
        .or_else(|| optional::<Status>(obj, path, "status"))
}

/// `Category` and `Tag` share the `{id, name}` shape, both fields optional.
fn locate_label<T: DeserializeOwned>(value: &Value, path: &str) -> Option<SchemaMismatch> {
    let Some(obj) = value.as_object() else {
        return Some(SchemaMismatch::new(
            display_path(path),
            format!("expected an object, found {}", kind(value)),
        ));
    };
    optional::<i64>(obj, path, "id")
        .or_else(|| optional::<String>(obj, path, "name"))
        .or_else(|| probe::<T>(value, path))
}

fn required<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Option<SchemaMismatch> {
    let path = join(path, key);
    match obj.get(key) {
        None => Some(SchemaMismatch::new(path, "missing required field")),
        Some(v) => probe::<T>(v, &path),
    }
}

fn optional<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
) -> Option<SchemaMismatch> {
    optional_with(obj, path, key, probe::<T>)
}

fn optional_with(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    check: fn(&Value, &str) -> Option<SchemaMismatch>,
) -> Option<SchemaMismatch> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => check(v, &join(path, key)),
    }
}

fn list(
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    check: fn(&Value, &str) -> Option<SchemaMismatch>,
) -> Option<SchemaMismatch> {
    let path = join(path, key);
    match obj.get(key) {
        None => None,
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| check(item, &format!("{path}[{i}]"))),
        Some(other) => Some(SchemaMismatch::new(
            path,
            format!("expected an array, found {}", kind(other)),
        )),
    }
}

fn probe<T: DeserializeOwned>(value: &Value, path: &str) -> Option<SchemaMismatch> {
    serde_json::from_value::<T>(value.clone())
        .err()
        .map(|e| SchemaMismatch::new(display_path(path), e.to_string()))
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT.to_owned()
    } else {
        path.to_owned()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
