//! Building and reshaping values with the json! macro.
//!
//! Run with: cargo run --example dynamic_values

use jsonval::{json, parse, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let hostname = "db-1.internal";
    let replicas = 3;

    let mut config = json!({
        "hostname": hostname,
        "replicas": replicas,
        "regions": ["eu-west", "us-east"],
        "primary": null
    });

    // Mutate in place
    if let Some(obj) = config.as_object_mut() {
        if let Some(primary) = obj.get_mut("primary") {
            primary.set_string("eu-west");
        }
        if let Some(regions) = obj.get_mut("regions").and_then(Value::as_array_mut) {
            regions.push(Value::from("ap-south"));
        }
    }

    println!("config: {:?}", config);

    // A built value compares equal to its parsed equivalent
    let parsed = parse(
        r#"{"hostname": "db-1.internal", "replicas": 3,
            "regions": ["eu-west", "us-east", "ap-south"], "primary": "eu-west"}"#,
    )?;
    assert_eq!(config, parsed);
    println!("parsed form matches the built form");

    // take() moves a value out and leaves null behind
    let regions = config
        .as_object_mut()
        .and_then(|obj| obj.get_mut("regions"))
        .map(Value::take)
        .unwrap_or_default();
    println!("took {:?}", regions);
    println!("left behind: {:?}", config.get("regions"));

    Ok(())
}
