//! Diff generation for audit logging
//!
//! Summarizes which top-level fields of an entry changed during an edit.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if let Some(after_val) = after_obj.get(key) {
                    if before_val != after_val {
                        changes.push(format!(
                            "{}: {} -> {}",
                            key,
                            format_value(before_val),
                            format_value(after_val)
                        ));
                    }
                } else {
                    changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    ));
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ => {
            if before != after {
                Some(format!(
                    "{} -> {}",
                    format_value(before),
                    format_value(after)
                ))
            } else {
                None
            }
        }
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"amount": 200.0, "category": "Rent", "date": "2024-01-06"});
        let after = json!({"amount": 250.0, "category": "Rent", "date": "2024-01-06"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 200.0 -> 250.0");
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"amount": 1000.0, "source": "Salary", "date": "2024-01-05"});
        let after = json!({"amount": 1000.0, "source": "Bonus", "date": "2024-02-01"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("source: \"Salary\" -> \"Bonus\""));
        assert!(diff.contains("date: \"2024-01-05\" -> \"2024-02-01\""));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(null), &json!(500.0)).unwrap(),
            "null -> 500.0"
        );
        assert_eq!(
            generate_diff(&json!("USD"), &json!("EUR")).unwrap(),
            "\"USD\" -> \"EUR\""
        );
    }

    #[test]
    fn test_field_added_and_removed() {
        let diff = generate_diff(&json!({"goal": "Car"}), &json!({"amount": 1.0})).unwrap();
        assert!(diff.contains("goal: \"Car\" -> (removed)"));
        assert!(diff.contains("amount: (added) -> 1.0"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"goal": "Trip", "amount": 10.0});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"source": "a".repeat(100)});
        let after = json!({"source": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
