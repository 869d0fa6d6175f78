//! Per-language string deduplication and stoplist filtering.
//!
//! An [`Optimizer`] is created fresh for each language and fed that
//! language's namespaces in order. It owns the set of leaf values already
//! emitted, so the first key to carry a value keeps it and every later
//! occurrence, under any key in any namespace, is dropped.
//!
//! Leaves that are not strings (numbers, booleans, null, arrays) are compared
//! through their JavaScript string form, so `0` and `"0"` collide.

use crate::i18n::stoplist::is_common_phrase;
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct Optimizer {
    seen: HashSet<String>,
    duplicates_removed: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optimize one namespace object, returning a pruned copy of the same shape.
    ///
    /// Nested objects that end up empty are omitted from their parent.
    pub fn optimize(&mut self, namespace: &Map<String, Value>) -> Map<String, Value> {
        let mut optimized = Map::new();

        for (key, value) in namespace {
            match value {
                Value::Object(nested) => {
                    let nested = self.optimize(nested);
                    if !nested.is_empty() {
                        optimized.insert(key.clone(), Value::Object(nested));
                    }
                }
                leaf => {
                    if let Some(kept) = self.filter_leaf(leaf) {
                        optimized.insert(key.clone(), kept);
                    }
                }
            }
        }

        optimized
    }

    fn filter_leaf(&mut self, leaf: &Value) -> Option<Value> {
        let (text, emitted) = match leaf {
            Value::String(s) => {
                let normalized = normalize_whitespace(s);
                (normalized.clone(), Value::String(normalized))
            }
            other => (coerce_to_string(other), other.clone()),
        };

        if is_common_phrase(&text) {
            return None;
        }
        if !self.seen.insert(text) {
            self.duplicates_removed += 1;
            return None;
        }

        Some(emitted)
    }

    /// Leaves dropped because an identical value was already emitted.
    /// Stoplist removals are not counted.
    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    /// Whether `value` has already been emitted for this language.
    pub fn has_seen(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// String conversion matching what the web runtime's `String(value)` yields.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn leaf_strings(map: &Map<String, Value>, out: &mut Vec<String>) {
        for value in map.values() {
            match value {
                Value::Object(nested) => leaf_strings(nested, out),
                Value::String(s) => out.push(s.clone()),
                other => out.push(coerce_to_string(other)),
            }
        }
    }

    // ==================== Stoplist Tests ====================

    #[test]
    fn test_stoplisted_value_is_dropped_but_not_counted() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"save": "حفظ", "title": "Hello"}));

        let optimized = optimizer.optimize(&input);

        assert_eq!(Value::Object(optimized), json!({"title": "Hello"}));
        assert_eq!(optimizer.duplicates_removed(), 0);
        assert!(optimizer.has_seen("Hello"));
        assert!(!optimizer.has_seen("حفظ"));
    }

    #[test]
    fn test_nested_object_emptied_by_stoplist_is_omitted() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"a": {"b": "حفظ"}}));

        assert!(optimizer.optimize(&input).is_empty());
    }

    #[test]
    fn test_stoplist_matches_after_normalization() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"ok": "  OK \n"}));

        assert!(optimizer.optimize(&input).is_empty());
    }

    // ==================== Dedup Tests ====================

    #[test]
    fn test_duplicate_across_namespaces_keeps_first() {
        let mut optimizer = Optimizer::new();
        let a = object(json!({"submit": "Submit"}));
        let b = object(json!({"send": "Submit", "other": "Other"}));

        let a_out = optimizer.optimize(&a);
        let b_out = optimizer.optimize(&b);

        assert_eq!(Value::Object(a_out), json!({"submit": "Submit"}));
        assert_eq!(Value::Object(b_out), json!({"other": "Other"}));
        assert_eq!(optimizer.duplicates_removed(), 1);
    }

    #[test]
    fn test_duplicate_within_nested_objects() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({
            "form": {"title": "Post an ad"},
            "header": {"cta": "Post an ad", "menu": {"home": "Home"}}
        }));

        let optimized = optimizer.optimize(&input);

        assert_eq!(
            Value::Object(optimized),
            json!({
                "form": {"title": "Post an ad"},
                "header": {"menu": {"home": "Home"}}
            })
        );
        assert_eq!(optimizer.duplicates_removed(), 1);
    }

    #[test]
    fn test_whitespace_variants_are_duplicates() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"a": "Sell  your car", "b": " Sell your car "}));

        let optimized = optimizer.optimize(&input);

        assert_eq!(Value::Object(optimized), json!({"a": "Sell your car"}));
        assert_eq!(optimizer.duplicates_removed(), 1);
    }

    #[test]
    fn test_no_duplicates_round_trips() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({
            "title": "Find your next home",
            "filters": {"price": "Price", "rooms": "Rooms"},
            "count": 3
        }));

        assert_eq!(optimizer.optimize(&input), input);
    }

    #[test]
    fn test_empty_input_object() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"empty": {}}));

        assert!(optimizer.optimize(&input).is_empty());
        assert_eq!(optimizer.seen_count(), 0);
    }

    // ==================== Coercion Tests ====================

    #[test]
    fn test_number_and_string_share_dedup_space() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"zero": 0, "label": "0", "off": false, "text": "false"}));

        let optimized = optimizer.optimize(&input);

        assert_eq!(Value::Object(optimized), json!({"zero": 0, "off": false}));
        assert_eq!(optimizer.duplicates_removed(), 2);
    }

    #[test]
    fn test_non_string_leaf_is_emitted_unchanged() {
        let mut optimizer = Optimizer::new();
        let input = object(json!({"years": [2020, 2021], "none": null}));

        assert_eq!(optimizer.optimize(&input), input);
        assert!(optimizer.has_seen("2020,2021"));
        assert!(optimizer.has_seen("null"));
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(&json!(0)), "0");
        assert_eq!(coerce_to_string(&json!(-12)), "-12");
        assert_eq!(coerce_to_string(&json!(1.5)), "1.5");
        assert_eq!(coerce_to_string(&json!(2.0)), "2");
        assert_eq!(coerce_to_string(&json!(true)), "true");
        assert_eq!(coerce_to_string(&json!(null)), "null");
        assert_eq!(coerce_to_string(&json!(["a", null, 1])), "a,,1");
        assert_eq!(coerce_to_string(&json!([{"k": "v"}])), "[object Object]");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
    }

    // ==================== Properties ====================

    fn leaf_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            4 => "[A-Za-z]{1,6}".prop_map(Value::String),
            1 => Just(Value::String("حفظ".to_string())),
            1 => Just(Value::String("OK".to_string())),
            1 => (0i64..5).prop_map(|n| json!(n)),
            1 => (0i64..5).prop_map(|n| Value::String(n.to_string())),
        ]
    }

    fn namespace_strategy() -> impl Strategy<Value = Map<String, Value>> {
        let leaf_map = prop::collection::btree_map("[a-z]{1,4}", leaf_value(), 0..8);
        prop::collection::btree_map(
            "[a-z]{1,4}",
            prop_oneof![
                3 => leaf_value(),
                1 => leaf_map.prop_map(|m| Value::Object(m.into_iter().collect())),
            ],
            0..10,
        )
        .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_stoplist_values_never_survive(
            namespaces in prop::collection::vec(namespace_strategy(), 1..4)
        ) {
            let mut optimizer = Optimizer::new();
            for ns in &namespaces {
                let mut leaves = Vec::new();
                leaf_strings(&optimizer.optimize(ns), &mut leaves);
                prop_assert!(leaves.iter().all(|leaf| !is_common_phrase(leaf)));
            }
        }

        #[test]
        fn prop_dedup_accounts_for_every_leaf(
            namespaces in prop::collection::vec(namespace_strategy(), 1..4)
        ) {
            let mut optimizer = Optimizer::new();
            let mut input_leaves = Vec::new();
            let mut output_leaves = Vec::new();

            for ns in &namespaces {
                leaf_strings(ns, &mut input_leaves);
                leaf_strings(&optimizer.optimize(ns), &mut output_leaves);
            }
            input_leaves.retain(|leaf| !is_common_phrase(leaf));

            prop_assert_eq!(
                optimizer.duplicates_removed() + output_leaves.len(),
                input_leaves.len()
            );

            let distinct_in: HashSet<_> = input_leaves.iter().collect();
            let distinct_out: HashSet<_> = output_leaves.iter().collect();
            prop_assert_eq!(distinct_out.len(), output_leaves.len());
            prop_assert_eq!(distinct_in, distinct_out);
        }
    }
}
