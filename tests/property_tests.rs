//! Property-based tests - generated inputs exercising the number and string
//! decoders plus the parser's no-panic guarantee.
//!
//! serde_json is used as an escaping oracle: it produces a valid JSON string
//! token for any Rust string, which this parser must then decode back to the
//! original.

use proptest::prelude::*;

use jsonval::{parse, Value};

fn encode_string(s: &str) -> String {
    // a Rust &str serialized by serde_json is exactly one JSON string token
    serde_json::to_string(s).unwrap()
}

proptest! {
    #[test]
    fn prop_finite_numbers_roundtrip(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        // Debug-format f64 is always in the JSON number grammar
        let text = format!("{:?}", n);
        prop_assert_eq!(parse(&text).unwrap(), Value::Number(n));
    }

    #[test]
    fn prop_integers_roundtrip(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(parse(&n.to_string()).unwrap(), Value::Number(n as f64));
    }

    #[test]
    fn prop_strings_roundtrip(s in ".*") {
        let text = encode_string(&s);
        prop_assert_eq!(parse(&text).unwrap(), Value::String(s));
    }

    #[test]
    fn prop_strings_roundtrip_inside_arrays(strings in prop::collection::vec(".*", 0..8)) {
        let tokens: Vec<String> = strings.iter().map(|s| encode_string(s)).collect();
        let text = format!("[{}]", tokens.join(","));
        let expected: Vec<Value> = strings.into_iter().map(Value::String).collect();
        prop_assert_eq!(parse(&text).unwrap(), Value::Array(expected));
    }

    #[test]
    fn prop_number_arrays_roundtrip(ns in prop::collection::vec(
        any::<f64>().prop_filter("finite", |n| n.is_finite()), 0..16)
    ) {
        let tokens: Vec<String> = ns.iter().map(|n| format!("{:?}", n)).collect();
        let text = format!("[ {} ]", tokens.join(" , "));
        let expected: Vec<Value> = ns.into_iter().map(Value::Number).collect();
        prop_assert_eq!(parse(&text).unwrap(), Value::Array(expected));
    }

    #[test]
    fn prop_objects_keep_source_order(keys in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let members: Vec<String> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| format!("\"{}\": {}", k, i))
            .collect();
        let text = format!("{{{}}}", members.join(", "));

        let value = parse(&text).unwrap();
        let obj = value.as_object().unwrap();

        // a duplicate key keeps its first position and the last value
        let mut expected = jsonval::Map::new();
        for (i, k) in keys.iter().enumerate() {
            expected.insert(k.clone(), Value::Number(i as f64));
        }
        prop_assert_eq!(obj, &expected);
    }

    #[test]
    fn prop_surrounding_whitespace_is_ignored(
        n in any::<f64>().prop_filter("finite", |n| n.is_finite()),
        ws_before in "[ \t\r\n]{0,8}",
        ws_after in "[ \t\r\n]{0,8}",
    ) {
        let text = format!("{}{:?}{}", ws_before, n, ws_after);
        prop_assert_eq!(parse(&text).unwrap(), Value::Number(n));
    }

    #[test]
    fn prop_parser_never_panics(input in ".*") {
        // any outcome is fine as long as it is a Result, not a panic
        let _ = parse(&input);
    }

    #[test]
    fn prop_bracket_soup_never_panics(input in "[\\[\\]{}:,\"\\\\ 0-9a-z]{0,64}") {
        let _ = parse(&input);
    }
}
