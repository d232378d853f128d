//! argsplit entry point: one JSON request on stdin, one JSON response on stdout.

use argsplit::config::Config;
use argsplit::input::SplitRequest;
use argsplit::output::{SplitResponse, format_response};

use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        log::error!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let request = match SplitRequest::parse(&input_str) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let cwd = std::env::current_dir().ok();
    let compiled = match Config::load(cwd.as_deref()).and_then(Config::compile) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = SplitResponse::build(&request, &compiled);
    println!("{}", format_response(&response));
    ExitCode::SUCCESS
}
