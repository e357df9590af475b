//! XLA command-line host.

use xlac::commands::{check_file, parse_file, run_file};
use xlac::{init_tracing, CliError, RunConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" | "parse" | "check" => {
            if args.len() < 3 {
                eprintln!("Usage: xla {command} <file.xla> [options]");
                eprintln!("Run `xla help` for the list of options.");
                std::process::exit(1);
            }
            RunConfig::from_args(&args[2..]).and_then(|config| match command.as_str() {
                "run" => run_file(&config),
                "parse" => parse_file(&config),
                _ => check_file(&config),
            })
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("xla {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        arg if !arg.starts_with('-') => {
            // `xla <file>` is shorthand for `xla run <file>`.
            RunConfig::from_args(&args[1..]).and_then(|config| run_file(&config))
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => {}
        Err(CliError::Reported) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("XLA expression language");
    println!();
    println!("Usage: xla <command> [options]");
    println!("       xla <file.xla> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.xla>       Run/evaluate an XLA program");
    println!("  parse <file.xla>     Parse and display the normalized tree");
    println!("  check <file.xla>     Parse only, report errors (no execution)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    print_options();
    println!();
    println!("Environment:");
    println!("  XLA_RESOURCES        Resource directory (default: ./resources if present)");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=xla_eval=debug");
    println!("  XLA_LOG_TREE         Show logs as an indented tree");
}

fn print_options() {
    println!("Options:");
    println!("  --resources <dir>    Directory of resources for @type/name references");
    println!("  --strict             Treat unbound atoms as errors");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!("  --max-depth=<n>      Evaluation depth limit (default: 10000)");
}
