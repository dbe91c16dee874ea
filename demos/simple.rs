//! Basic JSON parsing and value inspection.
//!
//! Run with: cargo run --example simple

use jsonval::{parse, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"
    {
        "name": "Alice Johnson",
        "email": "alice@example.com",
        "age": 30,
        "active": true,
        "scores": [9.5, 8.0, 10.0]
    }"#;

    let value = parse(text)?;

    let name = value.get("name").and_then(Value::as_str).unwrap_or("?");
    let age = value.get("age").and_then(Value::as_f64).unwrap_or(0.0);
    println!("{} is {} years old", name, age);

    if let Some(scores) = value.get("scores").and_then(Value::as_array) {
        let total: f64 = scores.iter().filter_map(Value::as_f64).sum();
        println!("average score: {:.2}", total / scores.len() as f64);
    }

    // Object members keep their source order
    if let Some(obj) = value.as_object() {
        for (key, member) in obj.iter() {
            println!("  {key}: {member:?}");
        }
    }

    Ok(())
}
