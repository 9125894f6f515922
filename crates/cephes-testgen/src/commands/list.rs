//! Listing the test cases.

use cephes_testgen::{GeneratorConfig, Reference};

/// Prints the configuration and one line per test case with its reference function and sample count.
pub fn list(config: &GeneratorConfig) {
    println!("namespace:   {}", config.namespace);
    println!("destination: {}", config.destination);
    println!("tolerance:   {}", config.tolerance);
    for case in &config.cases {
        println!(
            "{:<16} {:<12} {:<8} {:<6} {} samples",
            case.test_name,
            case.method,
            case.reference.map_or("custom", Reference::name),
            case.width,
            case.cases.len()
        );
    }
}
