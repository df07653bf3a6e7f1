use std::io::{stdin, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    match taboo::session::run(stdin().lock(), stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
