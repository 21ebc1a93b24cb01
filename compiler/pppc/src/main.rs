//! PPP CLI
//!
//! Reads a prefix-notation program, checks it, and runs it on a stack
//! machine.

use std::process::ExitCode;

use pppc::commands::{check_file, explain_error, lex_file, ops_file, run_file, tree_file};
use pppc::config::{Command, Invocation};

fn main() -> ExitCode {
    pppc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            eprintln!("Run `ppp help` for usage.");
            return ExitCode::FAILURE;
        }
    };

    let config = &invocation.config;
    match &invocation.command {
        Command::Run => run_file(config),
        Command::Check => check_file(config),
        Command::Lex => lex_file(config),
        Command::Tree => tree_file(config),
        Command::Ops => ops_file(config),
        Command::Explain(code) => explain_error(code),
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("ppp {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn print_usage() {
    println!("PPP: prefix-notation programs on a stack machine");
    println!();
    println!("Usage: ppp [command] [file] [options]");
    println!();
    println!("Commands:");
    println!("  run [file]          Check and run a program (default)");
    println!("  check [file]        Check a program without running it");
    println!("  lex [file]          Print the token stream");
    println!("  tree [file]         Print the expression trees");
    println!("  ops [file]          Print the linearized program");
    println!("  --explain <code>    Explain an error code (e.g., E2001)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("The file defaults to main.ppp.");
    println!();
    println!("Options:");
    println!("  --color=<mode>      Colored diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable phase tracing, e.g. RUST_LOG=ppp_eval=trace");
    println!("  PPP_LOG_TREE        Render tracing output as an indented tree");
    println!();
    println!("Examples:");
    println!("  ppp                          # Run main.ppp");
    println!("  ppp run demos/arith.ppp");
    println!("  ppp check demos/arith.ppp --color=never");
    println!("  ppp --explain E2002          # Explain division by literal zero");
}
