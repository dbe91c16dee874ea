//! Tests for the `json!` macro at the crate boundary, including interpolation
//! of runtime expressions and equivalence with parsed text.

use jsonval::{json, parse, Map, Value};

#[test]
fn literals() {
    assert_eq!(json!(null), Value::Null);
    assert_eq!(json!(true), Value::Bool(true));
    assert_eq!(json!(false), Value::Bool(false));
    assert_eq!(json!(1.25), Value::Number(1.25));
    assert_eq!(json!("text"), Value::from("text"));
}

#[test]
fn empty_containers() {
    assert_eq!(json!([]), Value::Array(vec![]));
    assert_eq!(json!({}), Value::Object(Map::new()));
}

#[test]
fn trailing_commas_are_accepted() {
    let v = json!([1, 2, 3,]);
    assert_eq!(v.as_array().map(Vec::len), Some(3));

    let v = json!({"a": 1, "b": 2,});
    assert_eq!(v.as_object().map(Map::len), Some(2));
}

#[test]
fn expressions_interpolate() {
    let name = "Alice";
    let age = 30;
    let v = json!({
        "name": name,
        "age": age,
        "next_age": (age + 1)
    });
    assert_eq!(v.get("name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(v.get("age").and_then(Value::as_f64), Some(30.0));
    assert_eq!(v.get("next_age").and_then(Value::as_f64), Some(31.0));
}

#[test]
fn deep_nesting() {
    let v = json!({
        "matrix": [[1, 2], [3, 4]],
        "meta": {"rows": 2, "cols": 2, "sparse": false}
    });

    let matrix = v.get("matrix").and_then(Value::as_array).unwrap();
    assert_eq!(matrix[1].as_array().unwrap()[0], Value::Number(3.0));
    assert_eq!(
        v.get("meta").and_then(|m| m.get("sparse")).and_then(Value::as_bool),
        Some(false)
    );
}

#[test]
fn macro_matches_parsed_text() {
    let built = json!({
        "id": 7,
        "tags": ["a", "b"],
        "owner": null
    });
    let parsed = parse(r#"{"id": 7, "tags": ["a", "b"], "owner": null}"#).unwrap();
    assert_eq!(built, parsed);
}
