//! The `explain` command: display documentation for error codes.

use std::process::ExitCode;

use ppp_diagnostic::{ErrorCode, ErrorDocs};

/// Print the documentation for a code like `E2001`.
pub fn explain_error(code_str: &str) -> ExitCode {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!(
            "Known codes: {}",
            ErrorCode::ALL
                .iter()
                .map(ErrorCode::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
        return ExitCode::FAILURE;
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            println!("{doc}");
            println!("{code} is reported by the {}.", code.phase());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No documentation available for {code}");
            ExitCode::FAILURE
        }
    }
}
