//! Command-line interface for descan
//!
//! Usage:
//!   descan check `<pattern>` [--json]                         - Validate a pattern and print its placeholders
//!   descan scan `<pattern>` `<source>` --types d,u,f,s [--json] - Scan a source string against a pattern

use clap::{Arg, ArgAction, Command};
use descan::{compile, TypeRequest};

fn main() {
    let matches = Command::new("descan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A typed inverse-format string scanner")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate a pattern and print its placeholder table")
                .arg(
                    Arg::new("pattern")
                        .help("Pattern text, e.g. \"{%d} and {}\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the placeholder table as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan a source string against a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("Pattern text, e.g. \"{%d} and {}\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("source")
                        .help("Source text to scan")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("types")
                        .long("types")
                        .help("Comma-separated type letters, one per placeholder: d, u, f or s")
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the scanned values as a JSON array")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let pattern = check_matches.get_one::<String>("pattern").unwrap();
            let json = check_matches.get_flag("json");
            handle_check_command(pattern, json);
        }
        Some(("scan", scan_matches)) => {
            let pattern = scan_matches.get_one::<String>("pattern").unwrap();
            let source = scan_matches.get_one::<String>("source").unwrap();
            let types = scan_matches.get_one::<String>("types").unwrap();
            let json = scan_matches.get_flag("json");
            handle_scan_command(pattern, source, types, json);
        }
        _ => unreachable!(),
    }
}

/// Handle the check command
fn handle_check_command(pattern: &str, json: bool) {
    let compiled = match compile(pattern) {
        Ok(compiled) => compiled,
        Err(e) => fail(&e.to_string()),
    };

    if json {
        match serde_json::to_string_pretty(compiled.placeholders()) {
            Ok(out) => println!("{}", out),
            Err(e) => fail(&e.to_string()),
        }
    } else {
        println!("{} placeholder(s)", compiled.placeholder_count());
        for (index, placeholder) in compiled.placeholders().iter().enumerate() {
            let specifier = placeholder
                .specifier
                .map_or("(bare)".to_string(), |s| s.to_string());
            println!(
                "  {}: bytes {}..={} {}",
                index, placeholder.open, placeholder.close, specifier
            );
        }
    }
}

/// Handle the scan command
fn handle_scan_command(pattern: &str, source: &str, types: &str, json: bool) {
    let requests = match parse_type_list(types) {
        Ok(requests) => requests,
        Err(e) => fail(&e),
    };

    let compiled = match compile(pattern) {
        Ok(compiled) => compiled,
        Err(e) => fail(&e.to_string()),
    };

    let values = match compiled.scan_values(source, &requests) {
        Ok(values) => values,
        Err(e) => fail(&e.to_string()),
    };

    if json {
        match serde_json::to_string_pretty(&values) {
            Ok(out) => println!("{}", out),
            Err(e) => fail(&e.to_string()),
        }
    } else {
        for value in values {
            println!("{}", value);
        }
    }
}

/// Parse a comma-separated type list like "d,u,f,s"
fn parse_type_list(list: &str) -> Result<Vec<TypeRequest>, String> {
    list.split(',')
        .map(|entry| {
            let entry = entry.trim();
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => TypeRequest::from_letter(c)
                    .ok_or_else(|| format!("unknown type letter '{}' (expected d, u, f or s)", c)),
                _ => Err(format!("expected a single type letter, got '{}'", entry)),
            }
        })
        .collect()
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
