//! `pascal`: console front end for the pascal-rows library.
//!
//! Thin glue only: argument intake via clap, conversion and rendering through
//! [`pascal_rows::cli`], printing and the process exit code here.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pascal_rows::cli;

/// Pascal triangle generator.
#[derive(Parser, Debug)]
#[command(name = "pascal", version, about = "Pascal triangle generator")]
struct Args {
    /// A row index, or the two endpoints of an inclusive range of rows.
    #[arg(value_name = "ROW", allow_negative_numbers = true)]
    rows: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.rows.is_empty() || args.rows[0].contains("help") {
        print!("{}", cli::usage("pascal"));
        return ExitCode::SUCCESS;
    }

    let (request, warnings) = match cli::parse_request(&args.rows) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::FAILURE;
        }
    };
    for warning in warnings {
        println!("{}", warning.message());
    }

    match cli::render(request) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
