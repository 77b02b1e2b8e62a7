//! Field-level diffs for audit update entries

use serde_json::{Map, Value};

/// Fields that change on every update and carry no information
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Generate a human-readable diff between two JSON snapshots
///
/// Nested objects (such as a configuration's behavior) are walked and
/// reported with dotted paths. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str, changes: &mut Vec<String>) {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            diff_objects(before_obj, after_obj, prefix, changes)
        }
        _ if before != after => changes.push(format!(
            "{}: {} -> {}",
            display_path(prefix),
            format_value(before),
            format_value(after)
        )),
        _ => {}
    }
}

fn diff_objects(
    before: &Map<String, Value>,
    after: &Map<String, Value>,
    prefix: &str,
    changes: &mut Vec<String>,
) {
    for (key, before_val) in before {
        if prefix.is_empty() && IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let path = join_path(prefix, key);
        match after.get(key) {
            Some(after_val) => collect_changes(before_val, after_val, &path, changes),
            None => changes.push(format!("{}: {} -> (removed)", path, format_value(before_val))),
        }
    }

    for (key, after_val) in after {
        if !before.contains_key(key) {
            changes.push(format!(
                "{}: (added) -> {}",
                join_path(prefix, key),
                format_value(after_val)
            ));
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn display_path(prefix: &str) -> &str {
    if prefix.is_empty() {
        "value"
    } else {
        prefix
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_field_only() {
        let before = json!({"name": "Frugal", "horizon_years": 5});
        let after = json!({"name": "Frugal", "horizon_years": 7});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "horizon_years: 5 -> 7");
    }

    #[test]
    fn test_nested_paths() {
        let before = json!({"behavior": {"target": "expense", "mode": {"kind": "zero"}}});
        let after = json!({"behavior": {"target": "expense", "mode": {"kind": "percentage", "change_percent": -20.0}}});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("behavior.mode.kind: \"zero\" -> \"percentage\""));
        assert!(diff.contains("behavior.mode.change_percent: (added) -> -20.0"));
    }

    #[test]
    fn test_updated_at_ignored() {
        let before = json!({"name": "Plan", "updated_at": "2026-01-01T00:00:00Z"});
        let after = json!({"name": "Plan", "updated_at": "2026-02-01T00:00:00Z"});
        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_removed_field() {
        let before = json!({"name": "Plan", "description": "old"});
        let after = json!({"name": "Plan"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "description: \"old\" -> (removed)");
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"description": "é".repeat(80)});
        let after = json!({"description": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
