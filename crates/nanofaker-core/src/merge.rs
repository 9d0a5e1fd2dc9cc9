use serde_json::Value;

/// Deep-merge a variant locale onto its base.
///
/// Objects present on both sides merge key by key; any other variant value
/// (array, string, number, bool) replaces the base value wholesale. `null`
/// entries in the variant leave the base untouched.
pub fn merge_locales(base: &Value, variant: &Value) -> Value {
    match (base, variant) {
        (Value::Object(base_map), Value::Object(variant_map)) => {
            let mut merged = base_map.clone();
            for (key, variant_value) in variant_map {
                if variant_value.is_null() {
                    continue;
                }
                let value = match merged.get(key) {
                    Some(base_value) if base_value.is_object() && variant_value.is_object() => {
                        merge_locales(base_value, variant_value)
                    }
                    _ => variant_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (_, Value::Null) => base.clone(),
        _ => variant.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_objects_merge_and_arrays_replace() {
        let base = json!({"a": [1, 2], "b": {"x": 1}});
        let variant = json!({"b": {"y": 2}});
        assert_eq!(
            merge_locales(&base, &variant),
            json!({"a": [1, 2], "b": {"x": 1, "y": 2}})
        );
    }

    #[test]
    fn variant_arrays_replace_base_arrays() {
        let base = json!({"title": "English", "address": {"city": ["NYC"], "state": ["NY"]}});
        let variant = json!({"title": "English (US)", "address": {"city": ["Austin"]}});
        assert_eq!(
            merge_locales(&base, &variant),
            json!({"title": "English (US)", "address": {"city": ["Austin"], "state": ["NY"]}})
        );
    }

    #[test]
    fn null_entries_are_skipped() {
        let base = json!({"title": "Base", "phone": {"formats": ["###"]}});
        let variant = json!({"title": null, "phone": {"formats": null}});
        assert_eq!(merge_locales(&base, &variant), base);
    }

    #[test]
    fn object_replaces_scalar() {
        let base = json!({"food": "none"});
        let variant = json!({"food": {"dish": ["Paella"]}});
        assert_eq!(merge_locales(&base, &variant), variant);
    }
}
