#![cfg(not(tarpaulin_include))]

use student_finder::{SearchBy, find_student, format_report, load_students};
use std::env;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <data_file> <name|usn> <query...>", args[0]);
        return Ok(ExitCode::from(2));
    }

    let Some(by) = SearchBy::parse(&args[2]) else {
        eprintln!("Error: search mode must be 'name' or 'usn', got {:?}", args[2]);
        return Ok(ExitCode::from(2));
    };
    // Multi-word names may be passed unquoted
    let query = args[3..].join(" ");

    let table = load_students(&args[1])?;
    match find_student(&table, by, &query) {
        Some(student) => {
            println!("{}", format_report(student));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No matching student found.");
            Ok(ExitCode::FAILURE)
        }
    }
}
