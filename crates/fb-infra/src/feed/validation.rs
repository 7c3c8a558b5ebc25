//! Field-name rules of the managed collection.
//!
//! Names must be non-empty, at most 768 bytes, free of control characters and
//! of `.`, `#`, `$`, `/`, `[` and `]`. Rules apply at every nesting level.

use fb_core::ports::FeedError;
use fb_core::RawItem;
use serde_json::Value;

const FORBIDDEN_CHARS: &[char] = &['.', '#', '$', '/', '[', ']'];
const MAX_NAME_BYTES: usize = 768;

pub fn validate_record(record: &RawItem) -> Result<(), FeedError> {
    validate_object(record, "")
}

fn validate_object(object: &RawItem, path: &str) -> Result<(), FeedError> {
    for (name, value) in object {
        validate_name(name, path)?;
        validate_value(value, &format!("{path}/{name}"))?;
    }
    Ok(())
}

fn validate_value(value: &Value, path: &str) -> Result<(), FeedError> {
    match value {
        Value::Object(object) => validate_object(object, path),
        Value::Array(values) => values
            .iter()
            .enumerate()
            .try_for_each(|(index, value)| validate_value(value, &format!("{path}/{index}"))),
        _ => Ok(()),
    }
}

fn validate_name(name: &str, path: &str) -> Result<(), FeedError> {
    if name.is_empty() {
        return Err(FeedError::Rejected(format!("empty field name under '{path}/'")));
    }
    if name.len() > MAX_NAME_BYTES {
        return Err(FeedError::Rejected(format!(
            "field name under '{path}/' exceeds {MAX_NAME_BYTES} bytes"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
    {
        return Err(FeedError::Rejected(format!(
            "field name '{path}/{name}' contains forbidden character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawItem {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_accepts_plain_record() {
        let result = validate_record(&record(json!({"name": "x", "players": {"p1": true}})));
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        for name in ["a.b", "a#b", "$a", "a/b", "a[0]"] {
            let mut object = RawItem::new();
            object.insert(name.to_string(), json!(1));
            assert!(
                matches!(validate_record(&object), Err(FeedError::Rejected(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_nested_violation() {
        let result = validate_record(&record(json!({"outer": {"bad.name": 1}})));
        assert!(matches!(result, Err(FeedError::Rejected(msg)) if msg.contains("/outer/bad.name")));
    }

    #[test]
    fn test_rejects_violation_inside_array() {
        let result = validate_record(&record(json!({"list": [{"ok": 1}, {"": 2}]})));
        assert!(matches!(result, Err(FeedError::Rejected(_))));
    }

    #[test]
    fn test_rejects_overlong_name() {
        let mut object = RawItem::new();
        object.insert("x".repeat(MAX_NAME_BYTES + 1), json!(1));
        assert!(validate_record(&object).is_err());
    }

    #[test]
    fn test_accepts_id_field() {
        assert!(validate_record(&record(json!({"id": "whatever"}))).is_ok());
    }
}
