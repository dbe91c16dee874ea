//! The diagnostic codes in action: one sample input per failure class.
//!
//! Run with: cargo run --example error_handling

use jsonval::{parse, parse_with_options, ParseOptions};

fn main() {
    let samples = [
        ("", "empty input"),
        ("nul", "misspelled literal"),
        ("+1", "sign JSON does not allow"),
        ("0123", "second token after a complete number"),
        ("1e309", "overflows f64"),
        ("\"unterminated", "no closing quote"),
        (r#""\q""#, "unknown escape"),
        (r#""\uD800""#, "lone surrogate half"),
        ("{\"a\" 1}", "missing colon"),
        ("[1, 2", "missing bracket"),
    ];

    for (input, label) in samples {
        match parse(input) {
            Ok(value) => println!("{label}: unexpectedly parsed {value:?}"),
            Err(err) => println!("{label}: {err}"),
        }
    }

    // Positions are available programmatically too
    if let Err(err) = parse("[1,\n 2,,\n 3]") {
        println!(
            "error at line {:?}, column {:?}: {}",
            err.line(),
            err.column(),
            err
        );
    }

    // The depth limit is configurable
    let bomb = "[".repeat(1_000_000);
    let options = ParseOptions::new().with_max_depth(64);
    if let Err(err) = parse_with_options(&bomb, options) {
        println!("nesting bomb rejected: {err}");
    }
}
