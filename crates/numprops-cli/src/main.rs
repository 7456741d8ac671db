//! Numprops CLI
//!
//! Classifies natural numbers against twelve named properties. With no
//! arguments it runs an interactive session, reading one request per line;
//! with arguments it evaluates a single request and exits.
//!
//! Usage:
//!   numprops                     # interactive session
//!   numprops 1024                # one-shot: full report for 1024
//!   numprops 1 5                 # one-shot: properties of 1..5
//!   numprops 1 3 odd -square    # one-shot: search with filters
//!   numprops -o json 1024        # one-shot, JSON output

use clap::Parser;
use numprops_core::{
    describe, describe_range, parse_request, search, NumberReport, NumberSummary, Query,
    QueryError, Request,
};
use std::io::{self, BufRead, Write};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Natural-number property classifier
#[derive(Parser, Debug)]
#[command(name = "numprops")]
#[command(
    author,
    version,
    about = "Classify natural numbers against named properties"
)]
struct Args {
    /// Request to evaluate non-interactively, using the same syntax as the
    /// interactive prompt (number, number + count, or number + count +
    /// property filters). Leave empty for an interactive session.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    request: Vec<String>,

    /// Output format for one-shot requests: text (default), json
    #[arg(short, long, default_value = "text")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.request.is_empty() {
        run_interactive()
    } else {
        run_once(&args)
    }
}

/// The interactive loop: one request per line until a lone `0` (or EOF).
fn run_interactive() -> anyhow::Result<()> {
    println!("\n{BOLD}{CYAN}Welcome to Numprops!{RESET}");
    print_supported_requests();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("\n{BOLD}Enter a request:{RESET} ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session like an explicit 0
        }

        match parse_request(&line) {
            Request::Exit => break,
            Request::Help => print_supported_requests(),
            Request::Query(query) => match answer(&query) {
                Ok(Answer::Report(report)) => print_report(&report),
                Ok(Answer::Rows(rows)) => {
                    println!();
                    for row in &rows {
                        print_summary(row);
                    }
                }
                Err(err) => println!("\n{RED}{err}{RESET}"),
            },
        }
    }

    println!("\n{BOLD}Goodbye!{RESET}");
    Ok(())
}

/// Evaluate the request given on the command line and exit. Errors set the
/// exit code so the one-shot mode composes in scripts.
fn run_once(args: &Args) -> anyhow::Result<()> {
    let line = args.request.join(" ");
    let json = match args.output.as_str() {
        "json" => true,
        "text" => false,
        other => anyhow::bail!("unknown output format: {other} (expected text or json)"),
    };

    match parse_request(&line) {
        Request::Exit => {}
        Request::Help => print_supported_requests(),
        Request::Query(query) => match answer(&query) {
            Ok(Answer::Report(report)) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_report(&report);
                }
            }
            Ok(Answer::Rows(rows)) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    println!();
                    for row in &rows {
                        print_summary(row);
                    }
                }
            }
            Err(err) => {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(
                            &serde_json::json!({ "error": err.to_string() })
                        )?
                    );
                } else {
                    eprintln!("{RED}{err}{RESET}");
                }
                std::process::exit(1);
            }
        },
    }
    Ok(())
}

enum Answer {
    Report(NumberReport),
    Rows(Vec<NumberSummary>),
}

fn answer(query: &Query) -> Result<Answer, QueryError> {
    match query {
        Query::Single(n) => describe(*n).map(Answer::Report),
        Query::Range { start, count } => describe_range(*start, *count).map(Answer::Rows),
        Query::Search {
            start,
            count,
            tokens,
        } => search(*start, *count, tokens).map(Answer::Rows),
    }
}

fn print_supported_requests() {
    println!("\n{BOLD}Supported requests:{RESET}");
    println!("- enter a natural number to know its properties;");
    println!("- enter two natural numbers to obtain the properties of the list:");
    println!("  * the first parameter represents a starting number;");
    println!("  * the second parameter shows how many consecutive numbers are to be printed;");
    println!("- two natural numbers and properties to search for;");
    println!("- a property preceded by minus must not be present in numbers;");
    println!("- separate the parameters with one space;");
    println!("- enter 0 to exit.");
}

fn print_report(report: &NumberReport) {
    println!("\n{BOLD}Properties of {CYAN}{}{RESET}\n", report.number);
    for row in &report.rows {
        let value = if row.holds {
            format!("{GREEN}true{RESET}")
        } else {
            format!("{DIM}false{RESET}")
        };
        println!("{:>20}: {}", row.property.label(), value);
    }
}

fn print_summary(summary: &NumberSummary) {
    let labels: Vec<&str> = summary.properties.iter().map(|p| p.label()).collect();
    println!(
        "{CYAN}{}{RESET} is {}",
        summary.number,
        labels.join(", ")
    );
}
