//! Basic usage of the outcome container and the host interop layer

use upshot_host::{attempt, failure_with, HostError, HostOutcome, Outcome};

fn parse_port(raw: &str) -> HostOutcome<u16> {
    match raw.parse::<u16>() {
        Ok(port) => Outcome::success(port),
        Err(_) => failure_with(format!("not a port number: {}", raw)),
    }
}

// Stand-in for a legacy API that reports failure through an out-parameter.
fn legacy_lookup(key: &str, error: &mut Option<HostError>) -> Option<String> {
    if key == "host" {
        Some("example.org".to_string())
    } else {
        *error = Some(HostError::new(format!("unknown key: {}", key)));
        None
    }
}

fn main() {
    // Method 1: construct, transform, coalesce
    println!("=== Method 1: Combinator Chain ===");
    let port = parse_port("8080")
        .map(|p| p + 1)
        .unwrap_or_else(|| 80);
    println!("picked port {}", port);

    // Method 2: a failure short-circuits the chain
    println!("\n=== Method 2: Failure Propagation ===");
    let outcome = parse_port("eighty").and_then(|p| {
        if p >= 1024 {
            Outcome::success(p)
        } else {
            failure_with("privileged port")
        }
    });
    println!("{}", outcome);

    // Method 3: adapting an out-parameter API
    println!("\n=== Method 3: Out-Parameter Interop ===");
    let host = attempt(|error| legacy_lookup("host", error));
    let missing = attempt(|error| legacy_lookup("proxy", error));
    println!("{}", host);
    println!("{}", missing);
}
