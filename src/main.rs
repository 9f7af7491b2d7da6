use std::process::ExitCode;

use buildtask::cli::Cli;
use buildtask::logging::init::init_tracing;
use buildtask::{exit_code, run};

fn main() -> ExitCode {
    let cli = Cli::parse_invocation(std::env::args_os()).unwrap_or_else(|e| e.exit());

    // Step echo is off for the help path only
    let traced = match cli.task() {
        Ok(task) => task.traces_steps(),
        Err(_) => true,
    };
    if traced && let Err(e) = init_tracing(cli.verbose, cli.quiet) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = exit_code(&e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
