mod cli;
mod config;
mod consts;
mod error;
mod renamer;
mod utils;

use std::io;
use std::process::ExitCode;

use cli::Cli;
use config::Config;
use consts::USAGE;
use error::AppError;
use renamer::Renamer;
use utils::{Timezone, debug_log, set_debug};

fn main() -> ExitCode {
    match Cli::parse_args(std::env::args_os()).and_then(run) {
        Ok(_) => ExitCode::SUCCESS,
        Err(AppError::Usage { .. }) => {
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<usize, AppError> {
    // Bad argument count never reaches the file system
    cli.start_dir()?;

    set_debug(cli.debug);
    let cli = cli.with_config(&Config::load());
    set_debug(cli.debug);

    let start_dir = cli.start_dir()?;
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    debug_log!("start dir {}, timezone {:?}", start_dir.display(), timezone);

    let renamer = Renamer::new(timezone, cli.all);
    let mut out = io::stdout().lock();
    renamer.apply_to_all(start_dir, &mut out)
}
