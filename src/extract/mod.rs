//! Key path extraction
//!
//! Walks a parsed JSON value and records every field location as a key
//! path: `.key` for object members (bare `key` at the root) and a `[]`
//! suffix for the element of an array. Arrays are sampled through their
//! first element only; later elements are never inspected, so keys that
//! appear only in later elements of a heterogeneous array are not reported.

pub mod path_set;
pub mod shape;

pub use path_set::KeyPathSet;
pub use shape::Shape;

use serde_json::Value;

/// Suffix marking the sampled element of an array
pub const ARRAY_SUFFIX: &str = "[]";

/// Extract the key paths reachable from `value`, each rooted at `prefix`.
///
/// Scalars contribute nothing regardless of the prefix.
pub fn extract(value: &Value, prefix: &str) -> KeyPathSet {
    let mut paths = KeyPathSet::new();
    collect(value, prefix, &mut paths);
    paths
}

/// [`extract`] with an empty prefix
pub fn extract_root(value: &Value) -> KeyPathSet {
    extract(value, "")
}

/// [`extract`] followed by an ascending lexicographic sort
pub fn extract_sorted(value: &Value, prefix: &str) -> Vec<String> {
    extract(value, prefix).into_sorted()
}

fn collect(value: &Value, prefix: &str, paths: &mut KeyPathSet) {
    match Shape::of(value) {
        Shape::Object(members) => {
            for (key, member) in members {
                let full = member_path(prefix, key);
                collect(member, &full, paths);
                paths.insert(full);
            }
        }
        Shape::Array(items) => {
            let Some(first) = items.first() else {
                return;
            };
            if Shape::of(first).is_container() {
                let element = element_path(prefix);
                collect(first, &element, paths);
                paths.insert(element);
            }
        }
        Shape::Scalar => {}
    }
}

fn member_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn element_path(prefix: &str) -> String {
    format!("{}{}", prefix, ARRAY_SUFFIX)
}
