use serde_json::Value;

/// Returns true when a value counts as present: not null, not `false`,
/// not numeric zero, not the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value the way it is shown to the user.
///
/// Integral floats lose their fractional part (`3.0` becomes `3`), arrays are
/// joined with commas and nested objects collapse to `[object Object]`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_f64()
                && let Some(f) = n.as_f64()
                && f.fract() == 0.0
                && f.abs() < 1e15
            {
                format!("{}", f as i64)
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Return the display form of the first candidate key holding a present value.
///
/// An absent record, a record that is not an object, or a record where no
/// candidate is present all yield an empty string.
pub fn pick_first(record: Option<&Value>, keys: &[&str]) -> String {
    let Some(fields) = record.and_then(Value::as_object) else {
        return String::new();
    };

    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_truthy(value))
        .map(display_value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEYS: &[&str] = &["title", "jobTitle", "subject"];

    #[test]
    fn test_pick_first_respects_key_priority() {
        let record = json!({"subject": "S", "jobTitle": "J", "title": "T"});
        assert_eq!(pick_first(Some(&record), KEYS), "T");

        let record = json!({"subject": "S", "jobTitle": "J"});
        assert_eq!(pick_first(Some(&record), KEYS), "J");

        let record = json!({"subject": "S"});
        assert_eq!(pick_first(Some(&record), KEYS), "S");
    }

    #[test]
    fn test_pick_first_every_population_pattern() {
        let values = ["a", "b", "c"];
        for mask in 0u8..8 {
            let mut record = serde_json::Map::new();
            for (i, key) in KEYS.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    record.insert(key.to_string(), json!(values[i]));
                }
            }
            let expected = (0..3)
                .find(|i| mask & (1 << i) != 0)
                .map(|i| values[i].to_string())
                .unwrap_or_default();
            assert_eq!(
                pick_first(Some(&Value::Object(record)), KEYS),
                expected,
                "mask {mask:03b}"
            );
        }
    }

    #[test]
    fn test_pick_first_skips_falsy_values() {
        let record = json!({"title": "", "jobTitle": null, "subject": 0, "extra": "x"});
        assert_eq!(pick_first(Some(&record), KEYS), "");

        let record = json!({"title": "", "jobTitle": false, "subject": 7});
        assert_eq!(pick_first(Some(&record), KEYS), "7");
    }

    #[test]
    fn test_pick_first_absent_record() {
        assert_eq!(pick_first(None, KEYS), "");
        assert_eq!(pick_first(Some(&Value::Null), KEYS), "");
        assert_eq!(pick_first(Some(&json!("title")), KEYS), "");
    }

    #[test]
    fn test_display_value_forms() {
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(3.0)), "3");
        assert_eq!(display_value(&json!(2.5)), "2.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", 1, null])), "a,1,");
        assert_eq!(display_value(&json!({"k": "v"})), "[object Object]");
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!("0")));
    }
}
