// Example demonstrating the Optional combinators

use eel_option::Optional;
use std::collections::HashMap;

fn find_first_even(start: i32, end: i32) -> Optional<i32> {
    Optional::from_nullable((start..=end).find(|i| i % 2 == 0))
}

fn main() {
    // Basic usage
    let x = Optional::Some(42);
    let y: Optional<i32> = Optional::none();

    println!("x or 0 = {}", x.get_or_else_value(0));
    println!("y or 0 = {}", y.get_or_else_value(0));

    // Doubling a nullable source
    let doubled = Optional::from_nullable(Some(5)).map(|n| n * 2).get_or_else_value(0);
    let missing = Optional::<i32>::from_nullable(None).map(|n| n * 2).get_or_else_value(0);
    println!("doubled = {}, missing = {}", doubled, missing);

    // Searching
    find_first_even(1, 10).for_each(|n| println!("first even in 1..=10: {}", n));
    let label = find_first_even(1, 1).fold(String::from("No even number found"), |n| n.to_string());
    println!("first even in 1..=1: {}", label);

    // Lookups with fallbacks
    let mut ports = HashMap::new();
    ports.insert("http", 80);
    let lookup = |name: &str| Optional::from_nullable(ports.get(name).copied());

    let https = lookup("https").or_else(lookup("http"));
    println!("https port (falling back to http) = {}", https);
    println!("has privileged port: {}", https.exists(|p| p < 1024));

    let computed = lookup("ssh").get_or_else_compute(|| {
        println!("  ssh not configured, computing a default");
        22
    });
    println!("ssh port = {}", computed);

    // Handing a value to code that speaks std Option
    let raw: Option<i32> = lookup("http").or_null();
    println!("raw http = {:?}", raw);

    // Nested values
    let nested = Optional::Some(Optional::Some(100));
    println!("nested = {}", nested.flat_map(|inner| inner).get_or_else_value(0));
}
